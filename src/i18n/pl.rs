//! Polish document (default locale)

use super::Node::{self, List, Map, Num, Seq, Text};

pub(super) static DOCUMENT: Node = Map(&[
    ("nav", Map(&[
        ("home", Text("Start")),
        ("services", Text("Usługi")),
        ("portfolio", Text("Realizacje")),
        ("industries", Text("Branże")),
        ("about", Text("O nas")),
        ("contact", Text("Kontakt")),
        ("audit", Text("Darmowy audyt")),
        ("book", Text("Umów konsultację")),
    ])),
    ("hero", Map(&[
        ("kicker", Text("Wszystkie działania online w jednych rękach")),
        ("title", Text("Budujemy rozpoznawalność i sprzedaż — przez treści, social media i reklamy.")),
        ("lead", Text("Tworzymy premium content, prowadzimy profile i uruchamiamy kampanie. Działamy szybko, procesowo i z naciskiem na wynik: ruch, rezerwacje, zamówienia i sprzedaż — w całej Polsce.")),
        ("points", List(&[
            "Cała Polska",
            "Szybka realizacja",
            "Jeden zespół (foto/wideo/SMM/ads/design)",
        ])),
        ("scope", Map(&[
            ("title", Text("Przykładowy zakres miesięczny")),
            ("items", List(&[
                "Plan treści i harmonogram",
                "Produkcja (foto/wideo) + montaż",
                "Publikacja + moderacja",
                "Reklamy Meta/Google + optymalizacja",
            ])),
        ])),
    ])),
    ("stats", Map(&[
        ("title", Text("Zaufanie w liczbach")),
        ("brands", Text("marek w 2 lata")),
        ("assets", Text("materiałów contentowych (wideo + foto)")),
        ("years", Text("lata działania Kairos Team")),
    ])),
    ("whatWeDo", Map(&[
        ("title", Text("Co robimy")),
        ("intro", Text("Najbardziej opłacalny model to abonament (miesięczna współpraca). Zakres dopasowujemy po konsultacji.")),
        ("packages", Map(&[
            ("title", Text("Abonamenty (najczęściej wybierane)")),
            ("desc", Text("Stały content i marketing co miesiąc. Pakiety: Starter / Growth / Performance. Zakres dopasowujemy po rozmowie.")),
            ("items", List(&[
                "Treści + publikacje",
                "Reklamy (Meta/Google)",
                "Google Business Profile",
                "Raport i plan na kolejny miesiąc",
            ])),
        ])),
        ("production", Map(&[
            ("title", Text("Produkcja treści")),
            ("desc", Text("Foto i wideo pod social media. Dni zdjęciowe, reels, sesje foto, montaż — w jakości premium.")),
            ("items", List(&[
                "Shorty (Reels/TikTok/YouTube)",
                "Foto produktów i wnętrz",
                "Montaż pod formaty",
                "Biblioteka materiałów",
            ])),
        ])),
        ("ads", Map(&[
            ("title", Text("Reklamy performance")),
            ("desc", Text("Leady, rezerwacje i sprzedaż. Kampanie Meta/Google z trackingiem i regularną optymalizacją.")),
            ("items", List(&[
                "Konfiguracja + tracking",
                "Retargeting",
                "Testy kreacji",
                "Kontrola CPL/CPA",
            ])),
        ])),
    ])),
    ("howWeWork", Map(&[
        ("title", Text("Jak wygląda współpraca")),
        ("intro", Text("Jasne kroki, bez chaosu.")),
        ("steps", Seq(&[
            Map(&[
                ("title", Text("Zgłoszenie")),
                ("desc", Text("Zostawiasz kontakt i cel.")),
            ]),
            Map(&[
                ("title", Text("Rozmowa 10–15 min")),
                ("desc", Text("Doprecyzujemy branżę, priorytety i zakres.")),
            ]),
            Map(&[
                ("title", Text("Plan na 30 dni")),
                ("desc", Text("Dostajesz konkretny plan i wybieramy pakiet.")),
            ]),
            Map(&[
                ("title", Text("Start")),
                ("desc", Text("Plan treści, nagrania/montaż, uporządkowanie profili, start reklam.")),
            ]),
            Map(&[
                ("title", Text("Kontrola")),
                ("desc", Text("Optymalizacja i raport na koniec miesiąca.")),
            ]),
        ])),
    ])),
    ("cta", Map(&[
        ("title", Text("Chcesz dopasowany plan i zakres?")),
        ("desc", Text("Umów konsultację albo poproś o darmowy audyt. Powiemy wprost: co działa, co nie i co poprawić.")),
        ("audit", Text("Darmowy audyt")),
        ("book", Text("Umów konsultację")),
    ])),
    ("footer", Map(&[
        ("desc", Text("Partner wzrostu „wszystko w jednym” dla firm lokalnych w całej Polsce: produkcja treści, prowadzenie social mediów i reklamy performance.")),
        ("location", Text("Warszawa • Polska (cała Polska)")),
        ("phone", Text("Telefon")),
        ("email", Text("Email (awaryjnie)")),
        ("rights", Text("© 2026 Kairos Team. Wszelkie prawa zastrzeżone.")),
    ])),
    ("services", Map(&[
        ("title", Text("Usługi")),
        ("intro", Text("Nie pokazujemy cen na stronie — po konsultacji dopasowujemy zakres i pakiet do Twoich celów.")),
        ("retainerTitle", Text("Abonamenty (miesięczna współpraca)")),
        ("retainerIntro", Text("Pakiety dla firm, które chcą rosnąć miesiąc po miesiącu. Jasny zakres, kanały i raport.")),
        ("starter", Map(&[
            ("tag", Text("Starter")),
            ("title", Text("Dla firm, które chcą zacząć stabilnie i profesjonalnie.")),
            ("desc", Text("Stały content + podstawowe działania marketingowe pod rozpoznawalność i pierwsze wyniki.")),
            ("items", List(&[
                "1 dzień zdjęciowy (do 6 godzin)",
                "Do 4 krótkich filmów",
                "Instagram + Facebook: 1 post / tydzień + relacje",
                "Reklama na 1 platformie (Meta lub Google): 2–3 kampanie",
                "Optymalizacja profilu Google",
                "Raport miesięczny + rekomendacje",
            ])),
        ])),
        ("growth", Map(&[
            ("tag", Text("Growth")),
            ("title", Text("Dla firm, które chcą szybciej zwiększać zasięg, ruch i sprzedaż.")),
            ("desc", Text("Więcej treści, częstsze publikacje i reklamy na 2 platformach — pod wynik.")),
            ("items", List(&[
                "Do 10 godzin nagrań miesięcznie",
                "Do 6 filmów",
                "Instagram + Facebook: 2 posty / tydzień + relacje",
                "Reklamy na 2 platformach (Meta + Google) + retargeting",
                "Prowadzenie profilu Google",
                "Raport + konsultacja",
            ])),
        ])),
        ("performance", Map(&[
            ("tag", Text("Performance")),
            ("title", Text("Dla sieci (2+ lokalizacje) i marek nastawionych na maksymalny wzrost.")),
            ("desc", Text("Szeroki zakres: więcej produkcji + performance marketing + testy kreacji.")),
            ("items", List(&[
                "Do 2 pełnych dni zdjęciowych",
                "Do 8 filmów + sesja foto jedzenia i wnętrza",
                "Prowadzenie 2–3 kanałów (Instagram, Facebook, TikTok)",
                "Reklamy Meta + Google: performance, retargeting, kampanie na rezerwacje/dostawy, testy kreacji",
                "Aktywne prowadzenie profilu Google",
                "Rozszerzony raport z analizą i planem rozwoju",
            ])),
        ])),
        ("productionTitle", Text("Produkcja treści (foto i wideo)")),
        ("productionIntro", Text("Jasne deliverables: ile shortów dostajesz i w jakim formacie.")),
        ("prodItems", Seq(&[
            Map(&[
                ("title", Text("Dzień zdjęciowy — do 6 godzin (1 lokalizacja)")),
                ("desc", Text("4–5 jakościowych shortów (Reels / TikTok / YouTube Shorts)")),
                ("items", List(&[
                    "Nagrania w pionie (short format)",
                    "Montaż i przygotowanie do publikacji",
                    "Ten sam materiał publikujesz na IG, TikTok i YouTube",
                ])),
            ]),
            Map(&[
                ("title", Text("Pół dnia zdjęciowego — do 3 godzin (1 lokalizacja)")),
                ("desc", Text("2–3 jakościowe shorty (Reels / TikTok / YouTube Shorts)")),
                ("items", List(&[
                    "Nagrania w pionie (short format)",
                    "Montaż i przygotowanie do publikacji",
                    "Gotowe do wrzucenia na 3 platformy",
                ])),
            ]),
            Map(&[
                ("title", Text("Wideo pionowe — do 40 sek (nasz materiał)")),
                ("desc", Text("Scenariusz + realizacja + montaż")),
                ("items", List(&[
                    "Ustalamy cel i styl",
                    "Piszemy prosty scenariusz",
                    "Realizujemy ujęcia i montujemy do 40 sek",
                ])),
            ]),
            Map(&[
                ("title", Text("Wideo pionowe — do 40 sek (materiały klienta)")),
                ("desc", Text("Montaż pod Twoją wizję (materiały min. 2 dni wcześniej)")),
                ("items", List(&[
                    "Klient wysyła materiały min. 2 dni przed",
                    "Dopasowujemy montaż do Twojej „chcę”",
                    "Finalny short gotowy do publikacji",
                ])),
            ]),
            Map(&[
                ("title", Text("Sesja foto: jedzenie + wnętrze — 2 godziny")),
                ("desc", Text("30–40 obrobionych zdjęć")),
                ("items", List(&[
                    "Zdjęcia jedzenia i wnętrza",
                    "Selekcja + obróbka",
                    "Gotowe do social mediów i Google",
                ])),
            ]),
        ])),
        ("additionalTitle", Text("Usługi dodatkowe")),
        ("additionalIntro", Text("Jeśli nie potrzebujesz pełnego abonamentu, możemy wykonać pojedyncze elementy digital marketingu.")),
        ("social", Map(&[
            ("title", Text("Social media i Google")),
            ("items", List(&[
                "SMM Basic: 1 kanał, 4 posty, do 8 relacji / miesiąc",
                "SMM Standard: Instagram + Facebook, 8 postów, do 12 relacji",
                "SMM Intensive: 2–3 kanały, 8–12 postów + aktywne relacje + moderacja",
                "Google Business Profile: prowadzenie i optymalizacja",
            ])),
        ])),
        ("ads", Map(&[
            ("title", Text("Reklamy")),
            ("items", List(&[
                "Audyt konta reklamowego",
                "Jednorazowa konfiguracja kampanii (do 3 kampanii, Meta lub Google)",
                "Prowadzenie reklam (1 platforma) — stała optymalizacja",
                "Prowadzenie reklam (2 platformy) — stała optymalizacja",
                "Prowadzenie reklam (rozszerzone) — testy kreacji + raportowanie",
            ])),
        ])),
        ("design", Map(&[
            ("title", Text("Design")),
            ("items", List(&[
                "Projekt posta: statyczna grafika + podstawowy tekst",
                "Pakiet 8 postów: spójny wygląd",
                "Projekt menu A4 (1 strona)",
                "Projekt menu wielostronicowego",
                "Proste logo / odświeżenie brandu",
            ])),
        ])),
        ("tailored", Map(&[
            ("title", Text("Chcesz dopasować zakres pod Twój biznes?")),
            ("desc", Text("Umów konsultację — przygotujemy propozycję i plan na 30 dni.")),
        ])),
    ])),
    ("portfolio", Map(&[
        ("title", Text("Realizacje")),
        ("intro", Text("Przykłady współpracy. Wyniki pokazujemy bez wrażliwych danych.")),
        ("cases", Seq(&[
            Map(&[
                ("name", Text("Maya Halal Market")),
                ("title", Text("2 lata współpracy: content + social media + kampanie")),
                ("links", Map(&[
                    ("site", Map(&[
                        ("label", Text("Strona")),
                        ("url", Text("https://halal-market.pl/")),
                    ])),
                    ("ig", Map(&[
                        ("label", Text("Instagram")),
                        ("url", Text("https://www.instagram.com/maya.halal.market?igsh=MXg4cWwzbGt2MG1oYw==")),
                    ])),
                ])),
                ("items", List(&[
                    "Stały pipeline treści (foto/wideo)",
                    "Prowadzenie profili",
                    "Kampanie wspierające sprzedaż i ruch w sklepie",
                ])),
                ("results", List(&[
                    "Wzrost sprzedaży: multi‑x",
                    "Wzrost zasięgu i aktywności",
                ])),
                ("chart", Map(&[
                    ("label", Text("Wzrost przychodów")),
                    ("growthText", Text("+733%")),
                    ("data", Seq(&[
                        Map(&[
                            ("name", Text("Start")),
                            ("value", Num(12)),
                            ("tooltip", Text("1,200 PLN / dzień")),
                        ]),
                        Map(&[
                            ("name", Text("Teraz")),
                            ("value", Num(100)),
                            ("tooltip", Text("10,000 PLN / dzień")),
                        ]),
                    ])),
                ])),
            ]),
            Map(&[
                ("name", Text("Turan Halal Restaurant")),
                ("title", Text("Stabilizacja i wzrost: content, IG aktywność, poprawa procesu dostaw")),
                ("links", Map(&[
                    ("ig", Map(&[
                        ("label", Text("Instagram")),
                        ("url", Text("https://www.instagram.com/_turan_restaurant_?igsh=ZDh3ODRvajR0YjAz")),
                    ])),
                ])),
                ("items", List(&[
                    "Rozwiązanie krytycznego problemu в systemie dostaw",
                    "Menu + komunikacja oferty",
                    "Wzrost aktywności i sprzedaży",
                ])),
                ("results", List(&[
                    "Poprawa rentowności dostaw",
                    "Wyższa aktywność na IG",
                ])),
                ("chart", Map(&[
                    ("label", Text("Miesięczny zysk")),
                    ("growthText", Text("Od deficytu do zysku")),
                    ("data", Seq(&[
                        Map(&[
                            ("name", Text("Przed")),
                            ("value", Num(-35)),
                            ("tooltip", Text("-3,500 PLN deficytu")),
                        ]),
                        Map(&[
                            ("name", Text("Teraz")),
                            ("value", Num(20)),
                            ("tooltip", Text("+2,000 PLN zysku")),
                        ]),
                    ])),
                ])),
            ]),
            Map(&[
                ("name", Text("Restauracja SZAFRAN")),
                ("title", Text("Od zera: nowy Instagram + content + Google Ads")),
                ("links", Map(&[
                    ("ig", Map(&[
                        ("label", Text("Instagram")),
                        ("url", Text("https://www.instagram.com/restauracja_szafran_warszawa?igsh=MXRxaTdrcmxvYnl6Nw==")),
                    ])),
                ])),
                ("items", List(&[
                    "Stworzenie/odbudowa profilu IG",
                    "Foto/wideo + regularne publikacje",
                    "Google Ads + optymalizacja",
                ])),
                ("results", List(&[
                    "Wzrost sprzedaży dziennej: 3×+",
                    "Stała współpraca (kontrakt)",
                ])),
                ("chart", Map(&[
                    ("label", Text("Dzienny przychód")),
                    ("growthText", Text("+220%")),
                    ("data", Seq(&[
                        Map(&[
                            ("name", Text("Start")),
                            ("value", Num(25)),
                            ("tooltip", Text("2,500 PLN / dzień")),
                        ]),
                        Map(&[
                            ("name", Text("Teraz")),
                            ("value", Num(80)),
                            ("tooltip", Text("8,000 PLN / dzień")),
                        ]),
                    ])),
                ])),
            ]),
            Map(&[
                ("name", Text("La Cantino")),
                ("title", Text("Jednorazowa realizacja: sesja foto + wideo")),
                ("links", Map(&[
                    ("map", Map(&[
                        ("label", Text("Google Maps")),
                        ("url", Text("https://maps.app.goo.gl/qiZ6wHSYH1iqKNn3A")),
                    ])),
                ])),
                ("items", List(&[
                    "Produkcja materiałów foto/wideo",
                    "Gotowe materiały do publikacji",
                ])),
                ("results", List(&[
                    "Komplet contentu do social mediów",
                ])),
                ("chart", Map(&[
                    ("label", Text("Objętość treści")),
                    ("growthText", Text("3x Jakość contentu")),
                    ("data", Seq(&[
                        Map(&[
                            ("name", Text("Przed")),
                            ("value", Num(20)),
                            ("tooltip", Text("2-3 filmy z telefonu")),
                        ]),
                        Map(&[
                            ("name", Text("Po")),
                            ("value", Num(100)),
                            ("tooltip", Text("6 pro filmów + 30 zdjęć")),
                        ]),
                    ])),
                ])),
            ]),
            Map(&[
                ("name", Text("Lukma Kebab Pizza")),
                ("title", Text("Dłuższa współpraca: promocja i marketing")),
                ("links", Map(&[
                    ("map", Map(&[
                        ("label", Text("Google Maps")),
                        ("url", Text("https://maps.app.goo.gl/K2LcEBy13TnQxKit7")),
                    ])),
                ])),
                ("items", List(&[
                    "Content + publikacje",
                    "Promocja i kampanie",
                    "Wsparcie komunikacji marki",
                ])),
                ("results", List(&[
                    "Wzrost zasięgu i sprzedaży",
                ])),
                ("chart", Map(&[
                    ("label", Text("Miesięczny zasięg")),
                    ("growthText", Text("50,000+")),
                    ("data", Seq(&[
                        Map(&[
                            ("name", Text("Start")),
                            ("value", Num(0)),
                            ("tooltip", Text("0 zasięgu (brak social)")),
                        ]),
                        Map(&[
                            ("name", Text("Teraz")),
                            ("value", Num(100)),
                            ("tooltip", Text("50,000 widzów / mies.")),
                        ]),
                    ])),
                ])),
            ]),
        ])),
        ("otherBrands", Map(&[
            ("title", Text("Inne marki")),
            ("items", List(&[
                "Ozbegim Restaurant",
                "Alif Restaurant",
                "Sultan",
                "Sakura Sushi",
            ])),
        ])),
        ("similar", Map(&[
            ("title", Text("Chcesz podobny system u siebie?")),
            ("desc", Text("Zostaw link do social mediów — wrócimy z krótkim audytem i propozycją zakresu.")),
        ])),
    ])),
    ("industries", Map(&[
        ("title", Text("Branże")),
        ("intro", Text("Specjalizujemy się w biznesie lokalnym w całej Polsce: restauracje, kawiarnie, markety i małe sieci.")),
        ("items", Seq(&[
            Map(&[
                ("title", Text("Restauracje i kawiarnie")),
                ("desc", Text("Treści, które sprzedają smak")),
                ("text", Text("Reels, zdjęcia produktów, klimat miejsca i regularny posting pod rezerwacje i dostawy.")),
                ("items", List(&[
                    "Reels / short-form",
                    "Sesje foto i wideo",
                    "Kampanie na rezerwacje/dostawy",
                ])),
            ]),
            Map(&[
                ("title", Text("Markety i retail")),
                ("desc", Text("Premium wizual produktu")),
                ("text", Text("Spójne kreacje + reklamy, które zamieniają się w realny ruch i zapytania.")),
                ("items", List(&[
                    "Kreacje pod ofertę",
                    "Targetowanie lokalne",
                    "Optymalizacja kampanii",
                ])),
            ]),
            Map(&[
                ("title", Text("Usługi lokalne")),
                ("desc", Text("Leady i telefony")),
                ("text", Text("Google Ads + landing + tracking, żeby mierzyć i skalować.")),
                ("items", List(&[
                    "Search intent",
                    "Tracking połączeń i formularzy",
                    "Kontrola CPL/CPA",
                ])),
            ]),
        ])),
        ("different", Map(&[
            ("title", Text("Twoja branża jest inna?")),
            ("desc", Text("Powiedz nam, czym się zajmujesz — powiemy, czy i jak to skalować.")),
        ])),
    ])),
    ("about", Map(&[
        ("title", Text("O nas")),
        ("intro", Text("Kairos Team to butikowa agencja growth marketingu. Nie jesteśmy korporacją — jesteśmy Twoim partnerem w skalowaniu biznesu.")),
        ("approach", Map(&[
            ("title", Text("Nasze podejście")),
            ("items", Seq(&[
                Map(&[
                    ("title", Text("Wszystko w jednym")),
                    ("desc", Text("Zajmujemy się wszystkim: od produkcji treści po reklamy efektywnościowe i zarządzanie profilem Google.")),
                ]),
                Map(&[
                    ("title", Text("Lokalne podejście")),
                    ("desc", Text("Rozumiemy polski rynek i wiemy, jak przyciągnąć lokalnych klientów do Twoich placówek.")),
                ]),
                Map(&[
                    ("title", Text("Oparte na danych")),
                    ("desc", Text("Każda kampania jest śledzona, mierzona i optymalizowana pod kątem najlepszego możliwego zwrotu z inwestycji (ROI).")),
                ]),
            ])),
        ])),
        ("why", Map(&[
            ("title", Text("Dlaczego to działa?")),
            ("desc", Text("Nie tylko „puszczamy reklamy”. Budujemy obecność, której ludzie ufają. Łącząc wysokiej jakości treści pionowe z precyzyjnym targetowaniem, tworzymy maszynę, która stale pozyskuje nowych klientów.")),
            ("stats", Map(&[
                ("growth", Text("300%")),
                ("growthLabel", Text("Średni wzrost sprzedaży")),
                ("brands", Text("30+")),
                ("brandsLabel", Text("Przeskalowanych marek")),
            ])),
        ])),
        ("cta", Map(&[
            ("title", Text("Gotowy na wzrost?")),
            ("desc", Text("Porozmawiajmy o Twoim biznesie i o tym, jak możemy pomóc Ci osiągnąć cele w ciągu najbliższych 90 dni.")),
            ("button", Text("Umów konsultację")),
        ])),
    ])),
    ("contact", Map(&[
        ("title", Text("Kontakt")),
        ("intro", Text("Najszybszy kontakt: telefon lub rezerwacja konsultacji. Email traktujemy jako opcję awaryjną.")),
        ("audit", Map(&[
            ("title", Text("Darmowy audyt (rozmowa diagnostyczna)")),
            ("desc", Text("Najpierw rozumiemy problem. W trakcie audytu zbieramy informacje o Twoim biznesie, analizujemy obecne działania online i wskazujemy, co poprawić. Na końcu proponujemy usługę lub dopasowany zakres (pakiet), a jeśli trzeba — ustalamy testowe nagrania/rolki, żeby szybko ruszyć.")),
            ("items", List(&[
                "Krótki wywiad: cele, oferta, lokalizacja, budżet",
                "Analiza profili / komunikacji / reklamy (jeśli jest)",
                "Rekomendacje: co zrobić w 30 dni",
                "Propozycja zakresu: Starter / Growth / Performance (lub custom)",
            ])),
            ("labels", Map(&[
                ("name", Text("Imię")),
                ("namePlaceholder", Text("Twoje imię")),
                ("email", Text("Email")),
                ("company", Text("Firma / link")),
                ("companyPlaceholder", Text("Nazwa firmy + link do social mediów/strony")),
                ("message", Text("Wiadomość")),
                ("messagePlaceholder", Text("Co chcesz osiągnąć w ciągu 30–90 dni?")),
                ("send", Text("Wyślij (email)")),
                ("slow", Text("Email jest najwolniejszą opcją — jeśli zależy Ci na czasie, wybierz telefon lub kalendarz.")),
            ])),
        ])),
        ("book", Map(&[
            ("title", Text("Umów konsultację online")),
            ("desc", Text("Kliknij i wybierz termin. To najszybsza ścieżka startu.")),
            ("cover", Map(&[
                ("title", Text("Co omówimy")),
                ("items", List(&[
                    "Cele: rozpoznawalność / sprzedaż / rezerwacje",
                    "Zakres: Starter / Growth / Performance (lub custom)",
                    "Pierwsze kroki: plan + ewentualne testowe nagrania",
                ])),
            ])),
            ("btns", Map(&[
                ("calendar", Text("Otwórz kalendarz")),
                ("call", Text("Zadzwoń teraz")),
            ])),
            ("info", Map(&[
                ("phone", Text("Telefon:")),
                ("ig", Text("Instagram:")),
                ("li", Text("LinkedIn:")),
            ])),
        ])),
        ("socials", Text("Kanały Social Media")),
    ])),
    ("privacy", Map(&[
        ("title", Text("Polityka prywatności")),
        ("intro", Text("Wstaw tutaj oficjalny tekst (RODO/cookies/tracking).")),
        ("collect", Map(&[
            ("title", Text("Co zbieramy")),
            ("desc", Text("Najczęściej: dane z formularzy, dane kontaktowe oraz zdarzenia analityczne (jeśli włączone).")),
        ])),
        ("why", Map(&[
            ("title", Text("Po co")),
            ("desc", Text("Aby odpowiedzieć na zapytania, poprawiać stronę i mierzyć skuteczność marketingu.")),
        ])),
    ])),
]);
