//! Russian document

use super::Node::{self, List, Map, Num, Seq, Text};

pub(super) static DOCUMENT: Node = Map(&[
    ("nav", Map(&[
        ("home", Text("Главная")),
        ("services", Text("Услуги")),
        ("portfolio", Text("Кейсы")),
        ("industries", Text("Сферы")),
        ("about", Text("О нас")),
        ("contact", Text("Контакты")),
        ("audit", Text("Бесплатный аудит")),
        ("book", Text("Записаться на консультацию")),
    ])),
    ("hero", Map(&[
        ("kicker", Text("Все онлайн-задачи в одних руках")),
        ("title", Text("Повышаем узнаваемость и продажи через контент, соцсети и рекламу.")),
        ("lead", Text("Мы снимаем premium-контент, ведём профили и запускаем кампании. Быстро, процессно и с фокусом на результат: трафик, брони, заказы и продажи — по всей Польше.")),
        ("points", List(&[
            "По всей Польше",
            "Быстрая реализация",
            "Одна команда (фото/видео/SMM/ads/design)",
        ])),
        ("scope", Map(&[
            ("title", Text("Пример месячного объёма")),
            ("items", List(&[
                "Контент-план и график",
                "Продакшн (фото/видео) + монтаж",
                "Публикации + модерация",
                "Реклама Meta/Google + оптимизация",
            ])),
        ])),
    ])),
    ("stats", Map(&[
        ("title", Text("Доверие в цифрах")),
        ("brands", Text("брендов за 2 года")),
        ("assets", Text("контент-материалов (видео + фото)")),
        ("years", Text("года работы Kairos Team")),
    ])),
    ("whatWeDo", Map(&[
        ("title", Text("Что делаем")),
        ("intro", Text("Лучший формат — ежемесячные пакеты (retainer). Объём подбираем после консультации.")),
        ("packages", Map(&[
            ("title", Text("Пакеты на месяц (топ-продукт)")),
            ("desc", Text("Стабильный маркетинг каждый месяц. Пакеты: Starter / Growth / Performance. Финальный объём — после консультации.")),
            ("items", List(&[
                "Контент + публикации",
                "Реклама (Meta/Google)",
                "Google Business Profile",
                "Отчёт + план на следующий месяц",
            ])),
        ])),
        ("production", Map(&[
            ("title", Text("Продакшн контента")),
            ("desc", Text("Фото и видео под соцплатформы. Съёмочные дни, reels, фотосессии, монтаж — premium качество.")),
            ("items", List(&[
                "Shorts (Reels/TikTok/YouTube)",
                "Фото продукта и интерьера",
                "Монтаж под форматы",
                "Библиотека материалов",
            ])),
        ])),
        ("ads", Map(&[
            ("title", Text("Performance-реклама")),
            ("desc", Text("Лиды, брони и продажи. Кампании Meta/Google с трекингом и регулярной оптимизацией.")),
            ("items", List(&[
                "Настройка + трекинг",
                "Ретаргетинг",
                "Тесты креативов",
                "Контроль CPL/CPA",
            ])),
        ])),
    ])),
    ("howWeWork", Map(&[
        ("title", Text("Как мы работаем")),
        ("intro", Text("Понятные шаги, без хаоса.")),
        ("steps", Seq(&[
            Map(&[
                ("title", Text("Заявка")),
                ("desc", Text("Вы оставляете контакт и цель.")),
            ]),
            Map(&[
                ("title", Text("Созвон 10–15 минут")),
                ("desc", Text("Уточняем приоритеты и объём.")),
            ]),
            Map(&[
                ("title", Text("План на 30 дней")),
                ("desc", Text("Даём план и выбираем пакет.")),
            ]),
            Map(&[
                ("title", Text("Старт")),
                ("desc", Text("Контент-план, съёмка/монтаж, профили, запуск рекламы.")),
            ]),
            Map(&[
                ("title", Text("Контроль")),
                ("desc", Text("Оптимизация и отчёт по итогам месяца.")),
            ]),
        ])),
    ])),
    ("cta", Map(&[
        ("title", Text("Нужен план и объём под ваш бизнес?")),
        ("desc", Text("Запишитесь на консультацию или запросите бесплатный аудит. Скажем прямо: что работает и что нужно исправить.")),
        ("audit", Text("Бесплатный аудит")),
        ("book", Text("Записаться на консультацию")),
    ])),
    ("footer", Map(&[
        ("desc", Text("Партнёр роста «всё в одном» для локального бизнеса по всей Польше: продакшн контента, ведение соцсетей и performance-реклама.")),
        ("location", Text("Варшава • Польша (по всей Польше)")),
        ("phone", Text("Телефон")),
        ("email", Text("Email (крайний)")),
        ("rights", Text("© 2026 Kairos Team. Все права защищены.")),
    ])),
    ("services", Map(&[
        ("title", Text("Услуги")),
        ("intro", Text("Цены на сайте не публикуем — после консультации подбираем объём и пакет под ваши цели.")),
        ("retainerTitle", Text("Пакеты на месяц (retainer)")),
        ("retainerIntro", Text("Чёткий объём, каналы и отчётность — для стабильного роста.")),
        ("starter", Map(&[
            ("tag", Text("Starter")),
            ("title", Text("Для небольших бизнесов, которым нужен стабильный, профессиональный старт.")),
            ("desc", Text("Стабильный контент + базовые маркетинговые действия под узнаваемость и первые результаты.")),
            ("items", List(&[
                "1 съёмочный день (до 6 часов)",
                "До 4 коротких видео",
                "Instagram + Facebook: 1 пост/нед + сторис",
                "Реклама на 1 платформе (Meta или Google): 2–3 кампании",
                "Оптимизация профиля Google",
                "Ежемесячный отчёт + рекомендации",
            ])),
        ])),
        ("growth", Map(&[
            ("tag", Text("Growth")),
            ("title", Text("Для бизнесов, которым нужен более быстрый рост охватов, трафика и продаж.")),
            ("desc", Text("Больше контента, чаще публикации и реклама на 2 платформах — под результат.")),
            ("items", List(&[
                "До 10 часов съёмок в месяц",
                "До 6 видео",
                "Instagram + Facebook: 2 поста/нед + сторис",
                "Реклама на 2 платформах (Meta + Google) + ретаргетинг",
                "Ведение профиля Google",
                "Отчёт + консультация",
            ])),
        ])),
        ("performance", Map(&[
            ("tag", Text("Performance")),
            ("title", Text("Для сетей (2+ локации) и брендов с фокусом на максимальный рост.")),
            ("desc", Text("Расширенный объём: больше продакшна + сильнее performance и тесты креативов.")),
            ("items", List(&[
                "До 2 полных съёмочных дней",
                "До 8 видео + фотосессия еды и интерьера",
                "Ведение 2–3 каналов (Instagram, Facebook, TikTok)",
                "Реклама Meta + Google: performance, ретаргетинг, кампании на брони/доставку, тесты креативов",
                "Активное ведение профиля Google",
                "Расширенный отчёт с анализом и планом роста",
            ])),
        ])),
        ("productionTitle", Text("Продакшн контента (фото и видео)")),
        ("productionIntro", Text("Чёткие deliverables: сколько short‑роликов вы получите и в каком формате.")),
        ("prodItems", Seq(&[
            Map(&[
                ("title", Text("Съёмочный день — до 6 часов (1 локация)")),
                ("desc", Text("4–5 качественных short‑видео (Reels / TikTok / YouTube Shorts)")),
                ("items", List(&[
                    "Вертикальная съёмка (short формат)",
                    "Монтаж и подготовка к публикации",
                    "Один ролик можно публиковать на всех 3 платформах",
                ])),
            ]),
            Map(&[
                ("title", Text("Полдня съёмки — до 3 часов (1 локация)")),
                ("desc", Text("2–3 качественных short‑видео (Reels / TikTok / YouTube Shorts)")),
                ("items", List(&[
                    "Вертикальная съёмка (short формат)",
                    "Монтаж и подготовка к публикации",
                    "Готово для 3 платформ",
                ])),
            ]),
            Map(&[
                ("title", Text("Вертикальное видео — до 40 сек (наш футаж)")),
                ("desc", Text("Сценарий + съёмка + монтаж")),
                ("items", List(&[
                    "Фиксируем цель и стиль",
                    "Пишем простой сценарий",
                    "Снимаем и монтируем до 40 секунд",
                ])),
            ]),
            Map(&[
                ("title", Text("Вертикальное видео — до 40 сек (футаж клиента)")),
                ("desc", Text("Монтаж под хотелку (материал за 2 дня)")),
                ("items", List(&[
                    "Клиент отправляет материал минимум за 2 дня",
                    "Подстраиваем монтаж под запрос",
                    "Финальный short готов к публикации",
                ])),
            ]),
            Map(&[
                ("title", Text("Фотосессия: еда + интерьер — 2 часа")),
                ("desc", Text("30–40 обработанных фото")),
                ("items", List(&[
                    "Съёмка еды и интерьера",
                    "Отбор + обработка",
                    "Готово для соцсетей и Google",
                ])),
            ]),
        ])),
        ("additionalTitle", Text("Дополнительные услуги")),
        ("additionalIntro", Text("Если не нужен полный пакет, можем сделать отдельные элементы digital‑маркетинга.")),
        ("social", Map(&[
            ("title", Text("Соцсети и Google")),
            ("items", List(&[
                "SMM Basic: 1 канал, 4 поста, до 8 сторис / месяц",
                "SMM Standard: Instagram + Facebook, 8 постов, до 12 сторис",
                "SMM Intensive: 2–3 канала, 8–12 постов + активные сторис + модерация",
                "Google Business Profile: ведение и оптимизация",
            ])),
        ])),
        ("ads", Map(&[
            ("title", Text("Реклама")),
            ("items", List(&[
                "Аудит рекламного кабинета",
                "Разовая настройка кампаний (до 3 кампаний, Meta или Google)",
                "Ведение рекламы (1 платформа) — регулярная оптимизация",
                "Ведение рекламы (2 платформы) — регулярная оптимизация",
                "Расширенное ведение — тесты креативов + отчётность",
            ])),
        ])),
        ("design", Map(&[
            ("title", Text("Дизайн")),
            ("items", List(&[
                "Дизайн поста: статичная графика + базовый текст",
                "Пакет 8 постов: единый стиль",
                "Дизайн меню A4 (1 страница)",
                "Дизайн многостраничного меню",
                "Простое лого / обновление бренда",
            ])),
        ])),
        ("tailored", Map(&[
            ("title", Text("Нужно подобрать объём под ваш бизнес?")),
            ("desc", Text("Запишитесь на консультацию — предложим варианты объёма и план на 30 дней.")),
        ])),
    ])),
    ("portfolio", Map(&[
        ("title", Text("Кейсы")),
        ("intro", Text("Примеры сотрудничества. Результаты показываем без чувствительных данных.")),
        ("cases", Seq(&[
            Map(&[
                ("name", Text("Maya Halal Market")),
                ("title", Text("2 года работы: контент + соцсети + кампании")),
                ("links", Map(&[
                    ("site", Map(&[
                        ("label", Text("Сайт")),
                        ("url", Text("https://halal-market.pl/")),
                    ])),
                    ("ig", Map(&[
                        ("label", Text("Instagram")),
                        ("url", Text("https://www.instagram.com/maya.halal.market?igsh=MXg4cWwzbGt2MG1oYw==")),
                    ])),
                ])),
                ("items", List(&[
                    "Стабильный контент‑пайплайн (фото/видео)",
                    "Ведение профилей",
                    "Кампании под продажи и трафик в магазин",
                ])),
                ("results", List(&[
                    "Рост продаж: multi‑x",
                    "Рост охватов и активности",
                ])),
                ("chart", Map(&[
                    ("label", Text("Рост выручки")),
                    ("growthText", Text("+733%")),
                    ("data", Seq(&[
                        Map(&[
                            ("name", Text("Старт")),
                            ("value", Num(12)),
                            ("tooltip", Text("1,200 PLN / день")),
                        ]),
                        Map(&[
                            ("name", Text("Сейчас")),
                            ("value", Num(100)),
                            ("tooltip", Text("10,000 PLN / день")),
                        ]),
                    ])),
                ])),
            ]),
            Map(&[
                ("name", Text("Turan Halal Restaurant")),
                ("title", Text("Стабилизация и рост: контент, активность IG, улучшение доставки")),
                ("links", Map(&[
                    ("ig", Map(&[
                        ("label", Text("Instagram")),
                        ("url", Text("https://www.instagram.com/_turan_restaurant_?igsh=ZDh3ODRvajR0YjAz")),
                    ])),
                ])),
                ("items", List(&[
                    "Закрыли критическую проблему в системе доставки",
                    "Меню и упаковка оффера",
                    "Рост активности и продаж",
                ])),
                ("results", List(&[
                    "Доставка: улучшение рентабельности",
                    "Рост активности в IG",
                ])),
                ("chart", Map(&[
                    ("label", Text("Месячная прибыль")),
                    ("growthText", Text("Из дефицита в прибыль")),
                    ("data", Seq(&[
                        Map(&[
                            ("name", Text("До")),
                            ("value", Num(-35)),
                            ("tooltip", Text("-3,500 PLN дефицит")),
                        ]),
                        Map(&[
                            ("name", Text("Сейчас")),
                            ("value", Num(20)),
                            ("tooltip", Text("+2,000 PLN прибыль")),
                        ]),
                    ])),
                ])),
            ]),
            Map(&[
                ("name", Text("Restauracja SZAFRAN")),
                ("title", Text("С нуля: новый Instagram + контент + Google Ads")),
                ("links", Map(&[
                    ("ig", Map(&[
                        ("label", Text("Instagram")),
                        ("url", Text("https://www.instagram.com/restauracja_szafran_warszawa?igsh=MXRxaTdrcmxvYnl6Nw==")),
                    ])),
                ])),
                ("items", List(&[
                    "Создание/перезапуск IG",
                    "Фото/видео + регулярные публикации",
                    "Google Ads + оптимизация",
                ])),
                ("results", List(&[
                    "Рост дневных продаж: 3×+",
                    "Постоянный контракт",
                ])),
                ("chart", Map(&[
                    ("label", Text("Дневная выручка")),
                    ("growthText", Text("+220%")),
                    ("data", Seq(&[
                        Map(&[
                            ("name", Text("Старт")),
                            ("value", Num(25)),
                            ("tooltip", Text("2,500 PLN / день")),
                        ]),
                        Map(&[
                            ("name", Text("Сейчас")),
                            ("value", Num(80)),
                            ("tooltip", Text("8,000 PLN / день")),
                        ]),
                    ])),
                ])),
            ]),
            Map(&[
                ("name", Text("La Cantino")),
                ("title", Text("Разовый проект: фото + видео")),
                ("links", Map(&[
                    ("map", Map(&[
                        ("label", Text("Google Maps")),
                        ("url", Text("https://maps.app.goo.gl/qiZ6wHSYH1iqKNn3A")),
                    ])),
                ])),
                ("items", List(&[
                    "Продакшн фото/видео",
                    "Готовые материалы для публикации",
                ])),
                ("results", List(&[
                    "Полный набор контента",
                ])),
                ("chart", Map(&[
                    ("label", Text("Объем контента")),
                    ("growthText", Text("3x Качество контента")),
                    ("data", Seq(&[
                        Map(&[
                            ("name", Text("До")),
                            ("value", Num(20)),
                            ("tooltip", Text("2-3 видео с телефона")),
                        ]),
                        Map(&[
                            ("name", Text("После")),
                            ("value", Num(100)),
                            ("tooltip", Text("6 профи видео + 30 фото")),
                        ]),
                    ])),
                ])),
            ]),
            Map(&[
                ("name", Text("Lukma Kebab Pizza")),
                ("title", Text("Долгая работа: продвижение и маркетинг")),
                ("links", Map(&[
                    ("map", Map(&[
                        ("label", Text("Google Maps")),
                        ("url", Text("https://maps.app.goo.gl/K2LcEBy13TnQxKit7")),
                    ])),
                ])),
                ("items", List(&[
                    "Контент + публикации",
                    "Продвижение и кампании",
                    "Поддержка коммуникации бренда",
                ])),
                ("results", List(&[
                    "Рост охвата и продаж",
                ])),
                ("chart", Map(&[
                    ("label", Text("Месячный охват")),
                    ("growthText", Text("50,000+")),
                    ("data", Seq(&[
                        Map(&[
                            ("name", Text("Старт")),
                            ("value", Num(0)),
                            ("tooltip", Text("0 охвата (без соцсетей)")),
                        ]),
                        Map(&[
                            ("name", Text("Сейчас")),
                            ("value", Num(100)),
                            ("tooltip", Text("50,000 зрителей / мес")),
                        ]),
                    ])),
                ])),
            ]),
        ])),
        ("otherBrands", Map(&[
            ("title", Text("Другие бренды")),
            ("items", List(&[
                "Ozbegim Restaurant",
                "Alif Restaurant",
                "Sultan",
                "Sakura Sushi",
            ])),
        ])),
        ("similar", Map(&[
            ("title", Text("Нужен такой же системный подход?")),
            ("desc", Text("Пришли ссылки на соцсети — вернёмся с быстрым аудитом и предложением объёма.")),
        ])),
    ])),
    ("industries", Map(&[
        ("title", Text("Сферы")),
        ("intro", Text("Фокусируемся на локальном бизнесе по всей Польше: рестораны, кафе, маркеты и небольшие сети.")),
        ("items", Seq(&[
            Map(&[
                ("title", Text("Контент, который продаёт вкус")),
                ("desc", Text("Рестораны и кафе")),
                ("text", Text("Reels, фото продукта, атмосфера и регулярный постинг под брони и доставку.")),
                ("items", List(&[
                    "Reels / short-form",
                    "Фото/видео-сессии",
                    "Кампании на брони/доставку",
                ])),
            ]),
            Map(&[
                ("title", Text("Premium-визуал продукта")),
                ("desc", Text("Ритейл и маркеты")),
                ("text", Text("Консистентные креативы + реклама, которая приводит трафик и обращения.")),
                ("items", List(&[
                    "Креативы под оффер",
                    "Локальный таргетинг",
                    "Оптимизация кампаний",
                ])),
            ]),
            Map(&[
                ("title", Text("Лиды и звонки")),
                ("desc", Text("Локальные услуги")),
                ("text", Text("Google Ads + лендинг + трекинг для измеримости и масштабирования.")),
                ("items", List(&[
                    "Поисковый интент",
                    "Трекинг звонков и форм",
                    "Контроль CPL/CPA",
                ])),
            ]),
        ])),
        ("different", Map(&[
            ("title", Text("У вас другая сфера?")),
            ("desc", Text("Расскажите, чем занимаетесь — скажем, как масштабировать.")),
        ])),
    ])),
    ("about", Map(&[
        ("title", Text("О нас")),
        ("intro", Text("Kairos Team — бутиковое агентство growth-маркетинга. Мы не корпорация, мы ваш партнёр по масштабированию.")),
        ("approach", Map(&[
            ("title", Text("Наш подход")),
            ("items", Seq(&[
                Map(&[
                    ("title", Text("Всё в одном")),
                    ("desc", Text("Мы берем на себя всё: от продакшна контента до performance-рекламы и управления профилем Google.")),
                ]),
                Map(&[
                    ("title", Text("Локальный фокус")),
                    ("desc", Text("Мы понимаем польский рынок и знаем, как привести локальных клиентов в ваши точки продаж.")),
                ]),
                Map(&[
                    ("title", Text("Опора на данные")),
                    ("desc", Text("Каждая кампания отслеживается, измеряется и оптимизируется для достижения наилучшего ROI.")),
                ]),
            ])),
        ])),
        ("why", Map(&[
            ("title", Text("Почему это работает?")),
            ("desc", Text("Мы не просто «запускаем рекламу». Мы выстраиваем присутствие, которому люди доверяют. Сочетая качественный вертикальный контент с точным таргетингом, мы создаем машину, которая стабильно приносит новых клиентов.")),
            ("stats", Map(&[
                ("growth", Text("300%")),
                ("growthLabel", Text("Средний рост продаж")),
                ("brands", Text("30+")),
                ("brandsLabel", Text("Брендов масштабировано")),
            ])),
        ])),
        ("cta", Map(&[
            ("title", Text("Готовы к масштабированию?")),
            ("desc", Text("Давайте обсудим ваш бизнес и то, как мы можем помочь вам достичь целей в ближайшие 90 дней.")),
            ("button", Text("Записаться на консультацию")),
        ])),
    ])),
    ("contact", Map(&[
        ("title", Text("Контакты")),
        ("intro", Text("Самый быстрый контакт: телефон или запись в календарь. Email — крайний вариант.")),
        ("audit", Map(&[
            ("title", Text("Бесплатный аудит (диагностическая консультация)")),
            ("desc", Text("Сначала мы понимаем проблему. Во время аудита собираем вводные по бизнесу, анализируем текущие онлайн-действия и показываем, что улучшить. Затем предлагаем услугу или подбираем объём (пакет). Если нужно — обсуждаем тестовые съёмки/ролики, чтобы быстро стартовать.")),
            ("items", List(&[
                "Короткий бриф: цели, оффер, локация, бюджет",
                "Разбор профилей / коммуникации / рекламы (если есть)",
                "Рекомендации: что сделать за 30 дней",
                "Предложение объёма: Starter / Growth / Performance (или custom)",
            ])),
            ("labels", Map(&[
                ("name", Text("Имя")),
                ("namePlaceholder", Text("Ваше имя")),
                ("email", Text("Email")),
                ("company", Text("Компания / ссылка")),
                ("companyPlaceholder", Text("Название компании + ссылка на соцсети/сайт")),
                ("message", Text("Сообщение")),
                ("messagePlaceholder", Text("Чего вы хотите достичь за 30–90 дней?")),
                ("send", Text("Отправить (email)")),
                ("slow", Text("Email — самый медленный канал. Если нужно быстро — телефон или календарь.")),
            ])),
        ])),
        ("book", Map(&[
            ("title", Text("Онлайн-запись на консультацию")),
            ("desc", Text("Нажмите и выберите время. Это самый быстрый старт.")),
            ("cover", Map(&[
                ("title", Text("Что обсудим")),
                ("items", List(&[
                    "Цели: узнаваемость / продажи / брони",
                    "Объём: Starter / Growth / Performance (или custom)",
                    "Первые шаги: план + возможная тестовая съёмка",
                ])),
            ])),
            ("btns", Map(&[
                ("calendar", Text("Открыть календарь")),
                ("call", Text("Позвонить")),
            ])),
            ("info", Map(&[
                ("phone", Text("Телефон:")),
                ("ig", Text("Instagram:")),
                ("li", Text("LinkedIn:")),
            ])),
        ])),
        ("socials", Text("Социальные сети")),
    ])),
    ("privacy", Map(&[
        ("title", Text("Политика конфиденциальности")),
        ("intro", Text("Замените на официальный текст (GDPR/cookies/tracking).")),
        ("collect", Map(&[
            ("title", Text("Что мы собираем")),
            ("desc", Text("Обычно: данные формы, контактные данные и события аналитики (если включено).")),
        ])),
        ("why", Map(&[
            ("title", Text("Зачем")),
            ("desc", Text("Чтобы отвечать на запросы, улучшать сайт и измерять эффективность маркетинга.")),
        ])),
    ])),
]);
