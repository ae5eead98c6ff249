//! English document

use super::Node::{self, List, Map, Num, Seq, Text};

pub(super) static DOCUMENT: Node = Map(&[
    ("nav", Map(&[
        ("home", Text("Home")),
        ("services", Text("Services")),
        ("portfolio", Text("Case Studies")),
        ("industries", Text("Industries")),
        ("about", Text("About")),
        ("contact", Text("Contact")),
        ("audit", Text("Free audit")),
        ("book", Text("Book a consultation")),
    ])),
    ("hero", Map(&[
        ("kicker", Text("All your online marketing in one place")),
        ("title", Text("We build awareness and sales through content, social media, and ads.")),
        ("lead", Text("We produce premium content, manage your profiles, and run campaigns. Fast, process-driven, and focused on outcomes: traffic, bookings, orders, and revenue — across Poland.")),
        ("points", List(&[
            "Nationwide (Poland)",
            "Fast execution",
            "One team (photo/video/SMM/ads/design)",
        ])),
        ("scope", Map(&[
            ("title", Text("Example monthly scope")),
            ("items", List(&[
                "Content plan & schedule",
                "Production (photo/video) + editing",
                "Publishing + moderation",
                "Meta/Google ads + optimization",
            ])),
        ])),
    ])),
    ("stats", Map(&[
        ("title", Text("Trust in numbers")),
        ("brands", Text("brands in 2 years")),
        ("assets", Text("content assets produced")),
        ("years", Text("years of excellence")),
    ])),
    ("whatWeDo", Map(&[
        ("title", Text("What we do")),
        ("intro", Text("Best model is a monthly package (retainer). Final scope after consultation.")),
        ("packages", Map(&[
            ("title", Text("Monthly packages (most popular)")),
            ("desc", Text("Consistent marketing every month. Packages: Starter / Growth / Performance. Scope tailored after the call.")),
            ("items", List(&[
                "Content + publishing",
                "Ads (Meta/Google)",
                "Google Business Profile",
                "Report + next-month plan",
            ])),
        ])),
        ("production", Map(&[
            ("title", Text("Content production")),
            ("desc", Text("Photo & video for social platforms. Production days, reels, photo sessions, editing — premium quality.")),
            ("items", List(&[
                "Shorts (Reels/TikTok/YouTube)",
                "Product & interior photos",
                "Editing for formats",
                "Asset library",
            ])),
        ])),
        ("ads", Map(&[
            ("title", Text("Performance ads")),
            ("desc", Text("Leads, bookings, and sales. Meta/Google campaigns with tracking and regular optimization.")),
            ("items", List(&[
                "Setup + tracking",
                "Retargeting",
                "Creative testing",
                "CPL/CPA control",
            ])),
        ])),
    ])),
    ("howWeWork", Map(&[
        ("title", Text("How we work")),
        ("intro", Text("Clear steps, no chaos.")),
        ("steps", Seq(&[
            Map(&[
                ("title", Text("Inquiry")),
                ("desc", Text("You leave your contact details and goal.")),
            ]),
            Map(&[
                ("title", Text("10–15 min call")),
                ("desc", Text("We clarify priorities and scope.")),
            ]),
            Map(&[
                ("title", Text("30-day plan")),
                ("desc", Text("You receive a concrete plan and we pick a package.")),
            ]),
            Map(&[
                ("title", Text("Launch")),
                ("desc", Text("Content plan, production/editing, profiles, ads launch.")),
            ]),
            Map(&[
                ("title", Text("Control")),
                ("desc", Text("Optimization and monthly report.")),
            ]),
        ])),
    ])),
    ("cta", Map(&[
        ("title", Text("Need a tailored plan and scope?")),
        ("desc", Text("Book a consultation or request a free audit. We’ll tell you directly what works and what to fix.")),
        ("audit", Text("Free audit")),
        ("book", Text("Book a consultation")),
    ])),
    ("footer", Map(&[
        ("desc", Text("All-in-one growth partner for local businesses across Poland: content production, social media management, and performance ads.")),
        ("location", Text("Warsaw • Poland (nationwide)")),
        ("phone", Text("Phone")),
        ("email", Text("Email (last)")),
        ("rights", Text("© 2026 Kairos Team. All rights reserved.")),
    ])),
    ("services", Map(&[
        ("title", Text("Services")),
        ("intro", Text("We don’t publish prices on the site — after a consultation we tailor the scope and the package to your goals.")),
        ("retainerTitle", Text("Monthly packages (retainer)")),
        ("retainerIntro", Text("Clear scope, channels and reporting — built for consistent growth.")),
        ("starter", Map(&[
            ("tag", Text("Starter")),
            ("title", Text("For smaller businesses that want a stable, professional start.")),
            ("desc", Text("Consistent content + basic marketing actions to improve brand and generate first results.")),
            ("items", List(&[
                "1 production day (up to 6 hours)",
                "Up to 4 short videos",
                "Instagram + Facebook: 1 post/week + stories",
                "Ads on 1 platform (Meta or Google): 2–3 campaigns",
                "Google profile optimization",
                "Monthly report + recommendations",
            ])),
        ])),
        ("growth", Map(&[
            ("tag", Text("Growth")),
            ("title", Text("For businesses that want faster reach, traffic, and sales growth.")),
            ("desc", Text("More content, higher publishing frequency, and ads on 2 platforms — outcome-driven.")),
            ("items", List(&[
                "Up to 10 hours of filming per month",
                "Up to 6 videos",
                "Instagram + Facebook: 2 posts/week + stories",
                "Ads on 2 platforms (Meta + Google) + retargeting",
                "Google profile management",
                "Report + consultation",
            ])),
        ])),
        ("performance", Map(&[
            ("tag", Text("Performance")),
            ("title", Text("For chains (2+ locations) and brands focused on maximum growth.")),
            ("desc", Text("Wider scope: more production + stronger performance marketing and creative tests.")),
            ("items", List(&[
                "Up to 2 full production days",
                "Up to 8 videos + food & interior photo session",
                "Managing 2–3 channels (Instagram, Facebook, TikTok)",
                "Meta + Google ads: performance, retargeting, booking/delivery campaigns, creative tests",
                "Active Google profile management",
                "Extended report with analysis + growth plan",
            ])),
        ])),
        ("productionTitle", Text("Content production (photo & video)")),
        ("productionIntro", Text("Clear deliverables: how many shorts you get and the format.")),
        ("prodItems", Seq(&[
            Map(&[
                ("title", Text("Production day — up to 6 hours (1 location)")),
                ("desc", Text("4–5 high-quality shorts (Reels / TikTok / YouTube Shorts)")),
                ("items", List(&[
                    "Vertical filming (short format)",
                    "Editing + export for publishing",
                    "Same asset can be posted on all 3 platforms",
                ])),
            ]),
            Map(&[
                ("title", Text("Half-day shoot — up to 3 hours (1 location)")),
                ("desc", Text("2–3 high-quality shorts (Reels / TikTok / YouTube Shorts)")),
                ("items", List(&[
                    "Vertical filming (short format)",
                    "Editing + export for publishing",
                    "Ready for 3 platforms",
                ])),
            ]),
            Map(&[
                ("title", Text("Vertical video — up to 40s (our footage)")),
                ("desc", Text("Script + shoot + edit")),
                ("items", List(&[
                    "We define goal and style",
                    "We write a simple script",
                    "We shoot and edit up to 40 seconds",
                ])),
            ]),
            Map(&[
                ("title", Text("Vertical video — up to 40s (client footage)")),
                ("desc", Text("Edit to your vision (footage sent 2 days in advance)")),
                ("items", List(&[
                    "Client sends footage at least 2 days before",
                    "We align edit to your request",
                    "Final short ready to publish",
                ])),
            ]),
            Map(&[
                ("title", Text("Food & interior photo session — 2 hours")),
                ("desc", Text("30–40 edited photos (food + interior)")),
                ("items", List(&[
                    "Food and interior shots",
                    "Selection + editing",
                    "Ready for socials and Google",
                ])),
            ]),
        ])),
        ("additionalTitle", Text("Additional services")),
        ("additionalIntro", Text("If you don’t need a full retainer, we can deliver specific digital marketing components.")),
        ("social", Map(&[
            ("title", Text("Social media & Google")),
            ("items", List(&[
                "SMM Basic: 1 channel, 4 posts, up to 8 stories / month",
                "SMM Standard: Instagram + Facebook, 8 posts, up to 12 stories",
                "SMM Intensive: 2–3 channels, 8–12 posts + active stories + moderation",
                "Google Business Profile: management + optimization",
            ])),
        ])),
        ("ads", Map(&[
            ("title", Text("Ads")),
            ("items", List(&[
                "Ad account audit",
                "One-time campaign setup (up to 3 campaigns, Meta or Google)",
                "Ad management (1 platform) — ongoing optimization",
                "Ad management (2 platforms) — ongoing optimization",
                "Extended ad management — creative tests + reporting",
            ])),
        ])),
        ("design", Map(&[
            ("title", Text("Design")),
            ("items", List(&[
                "Single post design: static visual + basic copy",
                "8-post package: consistent look",
                "Menu design A4 (1 page)",
                "Multi-page menu design",
                "Simple logo / brand refresh",
            ])),
        ])),
        ("tailored", Map(&[
            ("title", Text("Want a scope tailored to your business?")),
            ("desc", Text("Book a consultation — we’ll propose scope options and a 30-day plan.")),
        ])),
    ])),
    ("portfolio", Map(&[
        ("title", Text("Case studies")),
        ("intro", Text("Examples of cooperation. Results are presented without sensitive data.")),
        ("cases", Seq(&[
            Map(&[
                ("name", Text("Maya Halal Market")),
                ("title", Text("2-year partnership: content + social + campaigns")),
                ("links", Map(&[
                    ("site", Map(&[
                        ("label", Text("Website")),
                        ("url", Text("https://halal-market.pl/")),
                    ])),
                    ("ig", Map(&[
                        ("label", Text("Instagram")),
                        ("url", Text("https://www.instagram.com/maya.halal.market?igsh=MXg4cWwzbGt2MG1oYw==")),
                    ])),
                ])),
                ("items", List(&[
                    "Consistent content pipeline (photo/video)",
                    "Profile management",
                    "Campaigns supporting sales and in-store traffic",
                ])),
                ("results", List(&[
                    "Sales growth: multi‑x",
                    "Reach & engagement growth",
                ])),
                ("chart", Map(&[
                    ("label", Text("Revenue Growth")),
                    ("growthText", Text("+733%")),
                    ("data", Seq(&[
                        Map(&[
                            ("name", Text("Start")),
                            ("value", Num(12)),
                            ("tooltip", Text("1,200 PLN / day")),
                        ]),
                        Map(&[
                            ("name", Text("Now")),
                            ("value", Num(100)),
                            ("tooltip", Text("10,000 PLN / day")),
                        ]),
                    ])),
                ])),
            ]),
            Map(&[
                ("name", Text("Turan Halal Restaurant")),
                ("title", Text("Stabilization & growth: content, IG activity, delivery process improvement")),
                ("links", Map(&[
                    ("ig", Map(&[
                        ("label", Text("Instagram")),
                        ("url", Text("https://www.instagram.com/_turan_restaurant_?igsh=ZDh3ODRvajR0YjAz")),
                    ])),
                ])),
                ("items", List(&[
                    "Solved a critical delivery-system issue",
                    "Menu + offer communication",
                    "Higher engagement and sales",
                ])),
                ("results", List(&[
                    "Delivery profitability improved",
                    "Higher IG activity",
                ])),
                ("chart", Map(&[
                    ("label", Text("Monthly Profit")),
                    ("growthText", Text("From Deficit to Profit")),
                    ("data", Seq(&[
                        Map(&[
                            ("name", Text("Before")),
                            ("value", Num(-35)),
                            ("tooltip", Text("-3,500 PLN deficit")),
                        ]),
                        Map(&[
                            ("name", Text("Now")),
                            ("value", Num(20)),
                            ("tooltip", Text("+2,000 PLN profit")),
                        ]),
                    ])),
                ])),
            ]),
            Map(&[
                ("name", Text("Restauracja SZAFRAN")),
                ("title", Text("From scratch: Instagram + content + Google Ads")),
                ("links", Map(&[
                    ("ig", Map(&[
                        ("label", Text("Instagram")),
                        ("url", Text("https://www.instagram.com/restauracja_szafran_warszawa?igsh=MXRxaTdrcmxvYnl6Nw==")),
                    ])),
                ])),
                ("items", List(&[
                    "IG rebuild/setup",
                    "Photo/video + consistent publishing",
                    "Google Ads + optimization",
                ])),
                ("results", List(&[
                    "Daily sales growth: 3×+",
                    "Ongoing contract",
                ])),
                ("chart", Map(&[
                    ("label", Text("Daily Revenue")),
                    ("growthText", Text("+220%")),
                    ("data", Seq(&[
                        Map(&[
                            ("name", Text("Start")),
                            ("value", Num(25)),
                            ("tooltip", Text("2,500 PLN / day")),
                        ]),
                        Map(&[
                            ("name", Text("Now")),
                            ("value", Num(80)),
                            ("tooltip", Text("8,000 PLN / day")),
                        ]),
                    ])),
                ])),
            ]),
            Map(&[
                ("name", Text("La Cantino")),
                ("title", Text("One-off project: photo + video")),
                ("links", Map(&[
                    ("map", Map(&[
                        ("label", Text("Google Maps")),
                        ("url", Text("https://maps.app.goo.gl/qiZ6wHSYH1iqKNn3A")),
                    ])),
                ])),
                ("items", List(&[
                    "Photo/video production",
                    "Ready-to-publish assets",
                ])),
                ("results", List(&[
                    "Full content set for socials",
                ])),
                ("chart", Map(&[
                    ("label", Text("Content Volume")),
                    ("growthText", Text("3x Content Quality")),
                    ("data", Seq(&[
                        Map(&[
                            ("name", Text("Before")),
                            ("value", Num(20)),
                            ("tooltip", Text("2-3 phone videos / mo")),
                        ]),
                        Map(&[
                            ("name", Text("After")),
                            ("value", Num(100)),
                            ("tooltip", Text("6 pro videos + 30 photos")),
                        ]),
                    ])),
                ])),
            ]),
            Map(&[
                ("name", Text("Lukma Kebab Pizza")),
                ("title", Text("Longer cooperation: promotion & marketing")),
                ("links", Map(&[
                    ("map", Map(&[
                        ("label", Text("Google Maps")),
                        ("url", Text("https://maps.app.goo.gl/K2LcEBy13TnQxKit7")),
                    ])),
                ])),
                ("items", List(&[
                    "Content + publishing",
                    "Promotion and campaigns",
                    "Brand communication support",
                ])),
                ("results", List(&[
                    "Reach and sales growth",
                ])),
                ("chart", Map(&[
                    ("label", Text("Monthly Reach")),
                    ("growthText", Text("50,000+")),
                    ("data", Seq(&[
                        Map(&[
                            ("name", Text("Start")),
                            ("value", Num(0)),
                            ("tooltip", Text("0 reach (no social)")),
                        ]),
                        Map(&[
                            ("name", Text("Now")),
                            ("value", Num(100)),
                            ("tooltip", Text("50,000 viewers / mo")),
                        ]),
                    ])),
                ])),
            ]),
        ])),
        ("otherBrands", Map(&[
            ("title", Text("Other brands")),
            ("items", List(&[
                "Ozbegim Restaurant",
                "Alif Restaurant",
                "Sultan",
                "Sakura Sushi",
            ])),
        ])),
        ("similar", Map(&[
            ("title", Text("Want a similar system?")),
            ("desc", Text("Send your social links — we’ll reply with a quick audit and scope proposal.")),
        ])),
    ])),
    ("industries", Map(&[
        ("title", Text("Industries")),
        ("intro", Text("We focus on local businesses across Poland: restaurants, cafés, markets, and small chains.")),
        ("items", Seq(&[
            Map(&[
                ("title", Text("Restaurants & cafés")),
                ("desc", Text("Content that sells taste")),
                ("text", Text("Reels, product shots, atmosphere and consistent posting for bookings and delivery.")),
                ("items", List(&[
                    "Reels / short-form",
                    "Photo & video sessions",
                    "Booking/delivery campaigns",
                ])),
            ]),
            Map(&[
                ("title", Text("Retail & markets")),
                ("desc", Text("Premium product visuals")),
                ("text", Text("Consistent creatives + ads that turn into real traffic and inquiries.")),
                ("items", List(&[
                    "Offer-focused creatives",
                    "Local targeting",
                    "Campaign optimization",
                ])),
            ]),
            Map(&[
                ("title", Text("Local services")),
                ("desc", Text("Leads and calls")),
                ("text", Text("Google Ads + landing + tracking to measure and scale.")),
                ("items", List(&[
                    "Search intent",
                    "Call & form tracking",
                    "CPL/CPA control",
                ])),
            ]),
        ])),
        ("different", Map(&[
            ("title", Text("Different industry?")),
            ("desc", Text("Tell us what you do — we’ll tell you if and how to scale it.")),
        ])),
    ])),
    ("about", Map(&[
        ("title", Text("About Us")),
        ("intro", Text("Kairos Team is a boutique growth marketing agency. We’re not a corporation — we’re your partner in scaling your business.")),
        ("approach", Map(&[
            ("title", Text("Our Approach")),
            ("items", Seq(&[
                Map(&[
                    ("title", Text("All-in-one")),
                    ("desc", Text("We take care of everything: from content production to performance ads and Google profile management.")),
                ]),
                Map(&[
                    ("title", Text("Local Focus")),
                    ("desc", Text("We understand the Polish market and how to drive local customers to your physical locations.")),
                ]),
                Map(&[
                    ("title", Text("Data Driven")),
                    ("desc", Text("Every campaign is tracked, measured, and optimized for the best possible ROI.")),
                ]),
            ])),
        ])),
        ("why", Map(&[
            ("title", Text("Why it works?")),
            ("desc", Text("We don’t just \"run ads\". We build a presence that people trust. By combining high-quality vertical content with precision targeting, we create a machine that consistently brings in new customers.")),
            ("stats", Map(&[
                ("growth", Text("300%")),
                ("growthLabel", Text("Avg. Sales Growth")),
                ("brands", Text("30+")),
                ("brandsLabel", Text("Brands Scaled")),
            ])),
        ])),
        ("cta", Map(&[
            ("title", Text("Ready to scale?")),
            ("desc", Text("Let's talk about your business and how we can help you reach your goals in the next 90 days.")),
            ("button", Text("Book a Consultation")),
        ])),
    ])),
    ("contact", Map(&[
        ("title", Text("Contact")),
        ("intro", Text("Fastest contact: phone or booking. Email is the fallback option.")),
        ("audit", Map(&[
            ("title", Text("Free audit (diagnostic call)")),
            ("desc", Text("We start by understanding your situation. During the audit we collect business context, review your current online presence, and point out what to improve. Then we propose a service or a tailored scope (package). If needed, we agree on test shoots/reels to start fast.")),
            ("items", List(&[
                "Quick discovery: goals, offer, location, budget",
                "Review of profiles / messaging / ads (if any)",
                "Recommendations: what to do in 30 days",
                "Scope proposal: Starter / Growth / Performance (or custom)",
            ])),
            ("labels", Map(&[
                ("name", Text("Name")),
                ("namePlaceholder", Text("Your name")),
                ("email", Text("Email")),
                ("company", Text("Company / link")),
                ("companyPlaceholder", Text("Company name + socials/website link")),
                ("message", Text("Message")),
                ("messagePlaceholder", Text("What do you want to achieve in 30–90 days?")),
                ("send", Text("Send (email)")),
                ("slow", Text("Email is the slowest channel — for speed use phone or calendar.")),
            ])),
        ])),
        ("book", Map(&[
            ("title", Text("Book an online consultation")),
            ("desc", Text("Click and pick a time. This is the fastest way to start.")),
            ("cover", Map(&[
                ("title", Text("What we cover")),
                ("items", List(&[
                    "Goals: awareness / sales / bookings",
                    "Scope: Starter / Growth / Performance (or custom)",
                    "First steps: plan + optional test shoot",
                ])),
            ])),
            ("btns", Map(&[
                ("calendar", Text("Open calendar")),
                ("call", Text("Call now")),
            ])),
            ("info", Map(&[
                ("phone", Text("Phone:")),
                ("ig", Text("Instagram:")),
                ("li", Text("LinkedIn:")),
            ])),
        ])),
        ("socials", Text("Social Channels")),
    ])),
    ("privacy", Map(&[
        ("title", Text("Privacy Policy")),
        ("intro", Text("Replace this with your official policy text (GDPR/cookies/tracking).")),
        ("collect", Map(&[
            ("title", Text("What we collect")),
            ("desc", Text("Typically: form data, contact details, and analytics events (if enabled).")),
        ])),
        ("why", Map(&[
            ("title", Text("Why")),
            ("desc", Text("To respond to inquiries, improve the website, and measure marketing performance.")),
        ])),
    ])),
]);
