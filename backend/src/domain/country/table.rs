//! Country reference data.

countries! {
    Aruba => "AW", "Aruba", "ARUBA", ["ABW", "ARU"];
    Afghanistan => "AF", "Afghanistan", "AFGHANISTAN", [
        "Islamic Republic of Afghanistan", "Afġānistān", "AFG",
    ];
    Angola => "AO", "Angola", "ANGOLA", [
        "Republic of Angola", "República de Angola", "ʁɛpublika de an'ɡɔla", "AGO", "ANG",
    ];
    Anguilla => "AI", "Anguilla", "ANGUILLA", ["AIA"];
    AlandIslands => "AX", "Åland Islands", "ALAND_ISLANDS", [
        "Aaland", "Aland", "Ahvenanmaa", "ALA",
    ];
    Albania => "AL", "Albania", "ALBANIA", [
        "Republic of Albania", "Shqipëri", "Shqipëria", "Shqipnia", "ALB",
    ];
    Andorra => "AD", "Andorra", "ANDORRA", [
        "Principality of Andorra", "Principat d'Andorra", "AND",
    ];
    UnitedArabEmirates => "AE", "United Arab Emirates", "UNITED_ARAB_EMIRATES", [
        "UAE", "Emirates", "ARE",
    ];
    Argentina => "AR", "Argentina", "ARGENTINA", [
        "Argentine Republic", "República Argentina", "ARG",
    ];
    Armenia => "AM", "Armenia", "ARMENIA", [
        "Republic of Armenia", "Hayastan", "Հայաստանի Հանրապետություն", "ARM",
    ];
    AmericanSamoa => "AS", "American Samoa", "AMERICAN_SAMOA", [
        "Amerika Sāmoa", "Amelika Sāmoa", "Sāmoa Amelika", "ASM", "ASA",
    ];
    Antarctica => "AQ", "Antarctica", "ANTARCTICA", ["ATA"];
    FrenchSouthernAndAntarcticLands => "TF", "Territory of the French Southern and Antarctic Lands", "FRENCH_SOUTHERN_AND_ANTARCTIC_LANDS", [
        "French Southern Territories", "ATF",
    ];
    AntiguaAndBarbuda => "AG", "Antigua and Barbuda", "ANTIGUA_AND_BARBUDA", ["ATG", "ANT"];
    Australia => "AU", "Australia", "AUSTRALIA", ["Commonwealth of Australia", "AUS"];
    Austria => "AT", "Austria", "AUSTRIA", [
        "Republic of Austria", "Osterreich", "Oesterreich", "AUT",
    ];
    Azerbaijan => "AZ", "Azerbaijan", "AZERBAIJAN", [
        "Republic of Azerbaijan", "Azərbaycan Respublikası", "AZE",
    ];
    Burundi => "BI", "Burundi", "BURUNDI", [
        "Republic of Burundi", "Republika y'Uburundi", "République du Burundi", "BDI",
    ];
    Belgium => "BE", "Belgium", "BELGIUM", [
        "Kingdom of Belgium", "België", "Belgie", "Belgien", "Belgique", "Koninkrijk België",
        "Royaume de Belgique", "Königreich Belgien", "BEL",
    ];
    Benin => "BJ", "Benin", "BENIN", ["Republic of Benin", "République du Bénin", "BEN"];
    BurkinaFaso => "BF", "Burkina Faso", "BURKINA_FASO", ["BFA", "BUR"];
    Bangladesh => "BD", "Bangladesh", "BANGLADESH", [
        "People's Republic of Bangladesh", "Gônôprôjatôntri Bangladesh", "BGD", "BAN",
    ];
    Bulgaria => "BG", "Bulgaria", "BULGARIA", [
        "Republic of Bulgaria", "Република България", "BGR", "BUL",
    ];
    Bahrain => "BH", "Bahrain", "BAHRAIN", [
        "Kingdom of Bahrain", "Mamlakat al-Baḥrayn", "BHR", "BRN",
    ];
    Bahamas => "BS", "Bahamas", "BAHAMAS", ["Commonwealth of the Bahamas", "BHS", "BAH"];
    BosniaAndHerzegovina => "BA", "Bosnia and Herzegovina", "BOSNIA_AND_HERZEGOVINA", [
        "Bosnia-Herzegovina", "Босна и Херцеговина", "BIH",
    ];
    SaintBarthelemy => "BL", "Saint Barthélemy", "SAINT_BARTHELEMY", [
        "Collectivity of Saint Barthélemy", "St. Barthelemy", "Collectivité de Saint-Barthélemy",
        "BLM",
    ];
    Belarus => "BY", "Belarus", "BELARUS", [
        "Republic of Belarus", "Bielaruś", "Белоруссия", "Республика Белоруссия", "BLR",
    ];
    Belize => "BZ", "Belize", "BELIZE", ["BLZ", "BIZ"];
    Bermuda => "BM", "Bermuda", "BERMUDA", [
        "The Islands of Bermuda", "The Bermudas", "Somers Isles", "BMU", "BER",
    ];
    Bolivia => "BO", "Bolivia", "BOLIVIA", [
        "Plurinational State of Bolivia", "Buliwya", "Wuliwya", "Bolivia, Plurinational State of",
        "Estado Plurinacional de Bolivia", "Buliwya Mamallaqta", "Wuliwya Suyu", "Tetã Volívia",
        "BOL",
    ];
    Brazil => "BR", "Brazil", "BRAZIL", [
        "Federative Republic of Brazil", "Brasil", "República Federativa do Brasil", "BRA",
    ];
    Barbados => "BB", "Barbados", "BARBADOS", ["BRB", "BAR"];
    Brunei => "BN", "Brunei", "BRUNEI", [
        "Nation of Brunei, Abode of Peace", "Brunei Darussalam", "Nation of Brunei",
        "the Abode of Peace", "BRN", "BRU",
    ];
    Bhutan => "BT", "Bhutan", "BHUTAN", ["Kingdom of Bhutan", "BTN", "BHU"];
    BouvetIsland => "BV", "Bouvet Island", "BOUVET_ISLAND", ["Bouvetøya", "Bouvet-øya", "BVT"];
    Botswana => "BW", "Botswana", "BOTSWANA", [
        "Republic of Botswana", "Lefatshe la Botswana", "BWA", "BOT",
    ];
    CentralAfricanRepublic => "CF", "Central African Republic", "CENTRAL_AFRICAN_REPUBLIC", [
        "République centrafricaine", "CAF",
    ];
    Canada => "CA", "Canada", "CANADA", ["CAN"];
    Switzerland => "CH", "Switzerland", "SWITZERLAND", [
        "Swiss Confederation", "Schweiz", "Suisse", "Svizzera", "Svizra", "CHE", "SUI",
    ];
    Chile => "CL", "Chile", "CHILE", ["Republic of Chile", "República de Chile", "CHL", "CHI"];
    China => "CN", "China", "CHINA", [
        "People's Republic of China", "Zhōngguó", "Zhongguo", "Zhonghua", "中华人民共和国",
        "Zhōnghuá Rénmín Gònghéguó", "CHN",
    ];
    IvoryCoast => "CI", "Ivory Coast", "IVORY_COAST", [
        "Republic of Côte d'Ivoire", "Côte d'Ivoire", "République de Côte d'Ivoire", "CIV",
    ];
    Cameroon => "CM", "Cameroon", "CAMEROON", [
        "Republic of Cameroon", "République du Cameroun", "CMR",
    ];
    DrCongo => "CD", "Democratic Republic of the Congo", "DR_CONGO", [
        "DR Congo", "Congo-Kinshasa", "Congo, the Democratic Republic of the", "DRC", "COD",
    ];
    RepublicOfTheCongo => "CG", "Republic of the Congo", "REPUBLIC_OF_THE_CONGO", [
        "Congo", "Congo-Brazzaville", "COG", "CGO",
    ];
    CookIslands => "CK", "Cook Islands", "COOK_ISLANDS", ["Kūki 'Āirani", "COK"];
    Colombia => "CO", "Colombia", "COLOMBIA", [
        "Republic of Colombia", "República de Colombia", "COL",
    ];
    Comoros => "KM", "Comoros", "COMOROS", [
        "Union of the Comoros", "Union des Comores", "Udzima wa Komori", "al-Ittiḥād al-Qumurī",
        "COM",
    ];
    CapeVerde => "CV", "Cabo Verde", "CAPE_VERDE", [
        "Republic of Cabo Verde", "República de Cabo Verde", "CPV",
    ];
    CostaRica => "CR", "Costa Rica", "COSTA_RICA", [
        "Republic of Costa Rica", "República de Costa Rica", "CRI", "CRC",
    ];
    Cuba => "CU", "Cuba", "CUBA", ["Republic of Cuba", "República de Cuba", "CUB"];
    ChristmasIsland => "CX", "Christmas Island", "CHRISTMAS_ISLAND", [
        "Territory of Christmas Island", "CXR",
    ];
    CaymanIslands => "KY", "Cayman Islands", "CAYMAN_ISLANDS", ["CYM", "CAY"];
    Cyprus => "CY", "Cyprus", "CYPRUS", [
        "Republic of Cyprus", "Kýpros", "Kıbrıs", "Κυπριακή Δημοκρατία", "Kıbrıs Cumhuriyeti",
        "CYP",
    ];
    Czechia => "CZ", "Czech Republic", "CZECHIA", ["Česká republika", "Česko", "CZE"];
    Germany => "DE", "Germany", "GERMANY", [
        "Federal Republic of Germany", "Bundesrepublik Deutschland", "DEU", "GER",
    ];
    Djibouti => "DJ", "Djibouti", "DJIBOUTI", [
        "Republic of Djibouti", "Jabuuti", "Gabuuti", "République de Djibouti", "Gabuutih Ummuuno",
        "Jamhuuriyadda Jabuuti", "DJI",
    ];
    Dominica => "DM", "Dominica", "DOMINICA", [
        "Commonwealth of Dominica", "Dominique", "Wai‘tu kubuli", "DMA",
    ];
    Denmark => "DK", "Denmark", "DENMARK", [
        "Kingdom of Denmark", "Danmark", "Kongeriget Danmark", "DNK", "DEN",
    ];
    DominicanRepublic => "DO", "Dominican Republic", "DOMINICAN_REPUBLIC", ["DOM"];
    Algeria => "DZ", "Algeria", "ALGERIA", [
        "People's Democratic Republic of Algeria", "Dzayer", "Algérie", "DZA", "ALG",
    ];
    Ecuador => "EC", "Ecuador", "ECUADOR", ["Republic of Ecuador", "República del Ecuador", "ECU"];
    Egypt => "EG", "Egypt", "EGYPT", ["Arab Republic of Egypt", "EGY"];
    Eritrea => "ER", "Eritrea", "ERITREA", [
        "State of Eritrea", "ሃገረ ኤርትራ", "Dawlat Iritriyá", "ʾErtrā", "Iritriyā", "ERI",
    ];
    WesternSahara => "EH", "Sahrawi Arab Democratic Republic", "WESTERN_SAHARA", [
        "Taneẓroft Tutrimt", "ESH",
    ];
    Spain => "ES", "Spain", "SPAIN", ["Kingdom of Spain", "Reino de España", "ESP"];
    Estonia => "EE", "Estonia", "ESTONIA", [
        "Republic of Estonia", "Eesti", "Eesti Vabariik", "EST",
    ];
    Ethiopia => "ET", "Ethiopia", "ETHIOPIA", [
        "Federal Democratic Republic of Ethiopia", "ʾĪtyōṗṗyā", "የኢትዮጵያ ፌዴራላዊ ዲሞክራሲያዊ ሪፐብሊክ",
        "ETH",
    ];
    Finland => "FI", "Finland", "FINLAND", [
        "Republic of Finland", "Suomi", "Suomen tasavalta", "Republiken Finland", "FIN",
    ];
    Fiji => "FJ", "Fiji", "FIJI", [
        "Republic of Fiji", "Viti", "Matanitu ko Viti", "Fijī Gaṇarājya", "FJI", "FIJ",
    ];
    FalklandIslands => "FK", "Falkland Islands", "FALKLAND_ISLANDS", [
        "Islas Malvinas", "Falkland Islands (Malvinas)", "FLK",
    ];
    France => "FR", "France", "FRANCE", ["French Republic", "République française", "FRA"];
    FaroeIslands => "FO", "Faroe Islands", "FAROE_ISLANDS", ["Føroyar", "Færøerne", "FRO"];
    Micronesia => "FM", "Micronesia", "MICRONESIA", [
        "Federated States of Micronesia", "Micronesia, Federated States of", "FSM",
    ];
    Gabon => "GA", "Gabon", "GABON", ["Gabonese Republic", "République Gabonaise", "GAB"];
    UnitedKingdom => "GB", "United Kingdom", "UNITED_KINGDOM", [
        "United Kingdom of Great Britain and Northern Ireland", "UK", "Great Britain", "GBR",
    ];
    Georgia => "GE", "Georgia", "GEORGIA", ["Sakartvelo", "GEO"];
    Guernsey => "GG", "Guernsey", "GUERNSEY", [
        "Bailiwick of Guernsey", "Bailliage de Guernesey", "GGY",
    ];
    Ghana => "GH", "Ghana", "GHANA", ["Republic of Ghana", "GHA"];
    Gibraltar => "GI", "Gibraltar", "GIBRALTAR", ["GIB"];
    Guinea => "GN", "Guinea", "GUINEA", [
        "Republic of Guinea", "République de Guinée", "GIN", "GUI",
    ];
    Guadeloupe => "GP", "Guadeloupe", "GUADELOUPE", ["Gwadloup", "GLP"];
    Gambia => "GM", "Gambia", "GAMBIA", ["Republic of the Gambia", "GMB", "GAM"];
    GuineaBissau => "GW", "Guinea-Bissau", "GUINEA_BISSAU", [
        "Republic of Guinea-Bissau", "República da Guiné-Bissau", "GNB", "GBS",
    ];
    EquatorialGuinea => "GQ", "Equatorial Guinea", "EQUATORIAL_GUINEA", [
        "Republic of Equatorial Guinea", "República de Guinea Ecuatorial",
        "République de Guinée équatoriale", "República da Guiné Equatorial", "GNQ", "GEQ",
    ];
    Greece => "GR", "Greece", "GREECE", [
        "Hellenic Republic", "Elláda", "Ελληνική Δημοκρατία", "GRC", "GRE",
    ];
    Grenada => "GD", "Grenada", "GRENADA", ["GRD", "GRN"];
    Greenland => "GL", "Greenland", "GREENLAND", ["Grønland", "GRL"];
    Guatemala => "GT", "Guatemala", "GUATEMALA", ["Republic of Guatemala", "GTM", "GUA"];
    FrenchGuiana => "GF", "French Guiana", "FRENCH_GUIANA", ["Guiana", "Guyane", "GUF"];
    Guam => "GU", "Guam", "GUAM", ["Guåhån", "GUM"];
    Guyana => "GY", "Guyana", "GUYANA", ["Co-operative Republic of Guyana", "GUY"];
    HongKong => "HK", "Hong Kong", "HONG_KONG", [
        "Hong Kong Special Administrative Region of the People's Republic of China", "HKG",
    ];
    HeardIslandAndMcdonaldIslands => "HM", "Heard Island and McDonald Islands", "HEARD_ISLAND_AND_MCDONALD_ISLANDS", [
        "HMD",
    ];
    Honduras => "HN", "Honduras", "HONDURAS", [
        "Republic of Honduras", "República de Honduras", "HND", "HON",
    ];
    Croatia => "HR", "Croatia", "CROATIA", [
        "Republic of Croatia", "Hrvatska", "Republika Hrvatska", "HRV", "CRO",
    ];
    Haiti => "HT", "Haiti", "HAITI", [
        "Republic of Haiti", "République d'Haïti", "Repiblik Ayiti", "HTI", "HAI",
    ];
    Hungary => "HU", "Hungary", "HUNGARY", ["HUN"];
    Indonesia => "ID", "Indonesia", "INDONESIA", [
        "Republic of Indonesia", "Republik Indonesia", "IDN", "INA",
    ];
    IsleOfMan => "IM", "Isle of Man", "ISLE_OF_MAN", ["Ellan Vannin", "Mann", "Mannin", "IMN"];
    India => "IN", "India", "INDIA", [
        "Republic of India", "Bhārat", "Bharat Ganrajya", "இந்தியா", "IND",
    ];
    BritishIndianOceanTerritory => "IO", "British Indian Ocean Territory", "BRITISH_INDIAN_OCEAN_TERRITORY", [
        "IOT",
    ];
    Ireland => "IE", "Ireland", "IRELAND", [
        "Republic of Ireland", "Éire", "Poblacht na hÉireann", "IRL",
    ];
    Iran => "IR", "Iran", "IRAN", [
        "Islamic Republic of Iran", "Iran, Islamic Republic of", "Jomhuri-ye Eslāmi-ye Irān",
        "IRN", "IRI",
    ];
    Iraq => "IQ", "Iraq", "IRAQ", ["Republic of Iraq", "Jumhūriyyat al-‘Irāq", "IRQ"];
    Iceland => "IS", "Iceland", "ICELAND", [
        "Island", "Republic of Iceland", "Lýðveldið Ísland", "ISL",
    ];
    Israel => "IL", "Israel", "ISRAEL", ["State of Israel", "Medīnat Yisrā'el", "ISR"];
    Italy => "IT", "Italy", "ITALY", ["Italian Republic", "Repubblica italiana", "ITA"];
    Jamaica => "JM", "Jamaica", "JAMAICA", ["JAM"];
    Jersey => "JE", "Jersey", "JERSEY", [
        "Bailiwick of Jersey", "Bailliage de Jersey", "Bailliage dé Jèrri", "JEY",
    ];
    Jordan => "JO", "Jordan", "JORDAN", [
        "Hashemite Kingdom of Jordan", "al-Mamlakah al-Urdunīyah al-Hāshimīyah", "JOR",
    ];
    Japan => "JP", "Japan", "JAPAN", ["Nippon", "Nihon", "JPN"];
    Kazakhstan => "KZ", "Kazakhstan", "KAZAKHSTAN", [
        "Republic of Kazakhstan", "Qazaqstan", "Казахстан", "Қазақстан Республикасы",
        "Qazaqstan Respublïkası", "Республика Казахстан", "Respublika Kazakhstan", "KAZ",
    ];
    Kenya => "KE", "Kenya", "KENYA", ["Republic of Kenya", "Jamhuri ya Kenya", "KEN"];
    Kyrgyzstan => "KG", "Kyrgyzstan", "KYRGYZSTAN", [
        "Kyrgyz Republic", "Киргизия", "Кыргыз Республикасы", "Kyrgyz Respublikasy", "KGZ",
    ];
    Cambodia => "KH", "Cambodia", "CAMBODIA", ["Kingdom of Cambodia", "KHM", "CAM"];
    Kiribati => "KI", "Kiribati", "KIRIBATI", [
        "Independent and Sovereign Republic of Kiribati", "Republic of Kiribati",
        "Ribaberiki Kiribati", "KIR",
    ];
    SaintKittsAndNevis => "KN", "Saint Christopher and Nevis", "SAINT_KITTS_AND_NEVIS", [
        "Federation of Saint Christopher and Nevisa", "Federation of Saint Christopher and Nevis",
        "KNA", "SKN",
    ];
    SouthKorea => "KR", "South Korea", "SOUTH_KOREA", [
        "Republic of Korea", "Korea, Republic of", "KOR",
    ];
    Kosovo => "XK", "Kosovo", "KOSOVO", ["Republic of Kosovo", "Република Косово", "UNK", "KOS"];
    Kuwait => "KW", "Kuwait", "KUWAIT", ["State of Kuwait", "Dawlat al-Kuwait", "KWT", "KUW"];
    Laos => "LA", "Laos", "LAOS", [
        "Lao People's Democratic Republic", "Lao", "Sathalanalat Paxathipatai Paxaxon Lao", "LAO",
    ];
    Lebanon => "LB", "Lebanon", "LEBANON", [
        "Lebanese Republic", "Al-Jumhūrīyah Al-Libnānīyah", "LBN", "LIB",
    ];
    Liberia => "LR", "Liberia", "LIBERIA", ["Republic of Liberia", "LBR"];
    Libya => "LY", "Libya", "LIBYA", ["State of Libya", "Dawlat Libya", "LBY", "LBA"];
    SaintLucia => "LC", "Saint Lucia", "SAINT_LUCIA", ["LCA"];
    Liechtenstein => "LI", "Liechtenstein", "LIECHTENSTEIN", [
        "Principality of Liechtenstein", "Fürstentum Liechtenstein", "LIE",
    ];
    SriLanka => "LK", "Sri Lanka", "SRI_LANKA", [
        "Democratic Socialist Republic of Sri Lanka", "ilaṅkai", "LKA", "SRI",
    ];
    Lesotho => "LS", "Lesotho", "LESOTHO", ["Kingdom of Lesotho", "Muso oa Lesotho", "LSO", "LES"];
    Lithuania => "LT", "Lithuania", "LITHUANIA", [
        "Republic of Lithuania", "Lietuvos Respublika", "LTU",
    ];
    Luxembourg => "LU", "Luxembourg", "LUXEMBOURG", [
        "Grand Duchy of Luxembourg", "Grand-Duché de Luxembourg", "Großherzogtum Luxemburg",
        "Groussherzogtum Lëtzebuerg", "LUX",
    ];
    Latvia => "LV", "Latvia", "LATVIA", ["Republic of Latvia", "Latvijas Republika", "LVA", "LAT"];
    Macau => "MO", "Macau", "MACAU", [
        "Macao Special Administrative Region of the People's Republic of China", "澳门", "Macao",
        "中華人民共和國澳門特別行政區", "Região Administrativa Especial de Macau da República Popular da China",
        "MAC",
    ];
    SaintMartin => "MF", "Saint Martin", "SAINT_MARTIN", [
        "Collectivity of Saint Martin", "Collectivité de Saint-Martin",
        "Saint Martin (French part)", "MAF",
    ];
    Morocco => "MA", "Morocco", "MOROCCO", [
        "Kingdom of Morocco", "Al-Mamlakah al-Maġribiyah", "MAR",
    ];
    Monaco => "MC", "Monaco", "MONACO", [
        "Principality of Monaco", "Principauté de Monaco", "MCO", "MON",
    ];
    Moldova => "MD", "Moldova", "MOLDOVA", [
        "Republic of Moldova", "Moldova, Republic of", "Republica Moldova", "MDA",
    ];
    Madagascar => "MG", "Madagascar", "MADAGASCAR", [
        "Republic of Madagascar", "Repoblikan'i Madagasikara", "République de Madagascar", "MDG",
        "MAD",
    ];
    Maldives => "MV", "Maldives", "MALDIVES", [
        "Republic of the Maldives", "Maldive Islands", "Dhivehi Raajjeyge Jumhooriyya", "MDV",
    ];
    Mexico => "MX", "Mexico", "MEXICO", [
        "United Mexican States", "Mexicanos", "Estados Unidos Mexicanos", "MEX",
    ];
    MarshallIslands => "MH", "Marshall Islands", "MARSHALL_ISLANDS", [
        "Republic of the Marshall Islands", "Aolepān Aorōkin M̧ajeļ", "MHL",
    ];
    Macedonia => "MK", "Macedonia", "MACEDONIA", [
        "Republic of Macedonia", "Macedonia, the Former Yugoslav Republic of",
        "Република Македонија", "MKD",
    ];
    Mali => "ML", "Mali", "MALI", ["Republic of Mali", "République du Mali", "MLI"];
    Malta => "MT", "Malta", "MALTA", ["Republic of Malta", "Repubblika ta' Malta", "MLT"];
    Myanmar => "MM", "Myanmar", "MYANMAR", [
        "Republic of the Union of Myanmar", "Burma", "Pyidaunzu Thanmăda Myăma Nainngandaw", "MMR",
        "MYA",
    ];
    Montenegro => "ME", "Montenegro", "MONTENEGRO", ["Crna Gora", "MNE"];
    Mongolia => "MN", "Mongolia", "MONGOLIA", ["MNG", "MGL"];
    NorthernMarianaIslands => "MP", "Northern Mariana Islands", "NORTHERN_MARIANA_ISLANDS", [
        "Commonwealth of the Northern Mariana Islands", "Sankattan Siha Na Islas Mariånas", "MNP",
    ];
    Mozambique => "MZ", "Mozambique", "MOZAMBIQUE", [
        "Republic of Mozambique", "República de Moçambique", "MOZ",
    ];
    Mauritania => "MR", "Mauritania", "MAURITANIA", [
        "Islamic Republic of Mauritania", "al-Jumhūriyyah al-ʾIslāmiyyah al-Mūrītāniyyah", "MRT",
        "MTN",
    ];
    Montserrat => "MS", "Montserrat", "MONTSERRAT", ["MSR"];
    Martinique => "MQ", "Martinique", "MARTINIQUE", ["MTQ"];
    Mauritius => "MU", "Mauritius", "MAURITIUS", [
        "Republic of Mauritius", "République de Maurice", "MUS", "MRI",
    ];
    Malawi => "MW", "Malawi", "MALAWI", ["Republic of Malawi", "MWI", "MAW"];
    Malaysia => "MY", "Malaysia", "MALAYSIA", ["MYS", "MAS"];
    Mayotte => "YT", "Mayotte", "MAYOTTE", [
        "Department of Mayotte", "Département de Mayotte", "MYT",
    ];
    Namibia => "NA", "Namibia", "NAMIBIA", ["Republic of Namibia", "Namibië", "NAM"];
    NewCaledonia => "NC", "New Caledonia", "NEW_CALEDONIA", ["NCL"];
    Niger => "NE", "Niger", "NIGER", ["Republic of Niger", "Nijar", "NER", "NIG"];
    NorfolkIsland => "NF", "Norfolk Island", "NORFOLK_ISLAND", [
        "Territory of Norfolk Island", "Teratri of Norf'k Ailen", "NFK",
    ];
    Nigeria => "NG", "Nigeria", "NIGERIA", [
        "Federal Republic of Nigeria", "Nijeriya", "Naíjíríà", "NGA", "NGR",
    ];
    Nicaragua => "NI", "Nicaragua", "NICARAGUA", [
        "Republic of Nicaragua", "República de Nicaragua", "NIC", "NCA",
    ];
    Niue => "NU", "Niue", "NIUE", ["NIU"];
    Netherlands => "NL", "Netherlands", "NETHERLANDS", [
        "Holland", "Nederland", "The Netherlands", "NLD", "NED",
    ];
    Norway => "NO", "Norway", "NORWAY", [
        "Kingdom of Norway", "Norge", "Noreg", "Kongeriket Norge", "Kongeriket Noreg", "NOR",
    ];
    Nepal => "NP", "Nepal", "NEPAL", [
        "Federal Democratic Republic of Nepal", "Loktāntrik Ganatantra Nepāl", "NPL", "NEP",
    ];
    Nauru => "NR", "Nauru", "NAURU", [
        "Republic of Nauru", "Naoero", "Pleasant Island", "Ripublik Naoero", "NRU",
    ];
    NewZealand => "NZ", "New Zealand", "NEW_ZEALAND", ["Aotearoa", "NZL"];
    Oman => "OM", "Oman", "OMAN", ["Sultanate of Oman", "Salṭanat ʻUmān", "OMN", "OMA"];
    Pakistan => "PK", "Pakistan", "PAKISTAN", [
        "Islamic Republic of Pakistan", "Pākistān", "Islāmī Jumhūriya'eh Pākistān", "PAK",
    ];
    Panama => "PA", "Panama", "PANAMA", ["Republic of Panama", "República de Panamá", "PAN"];
    PitcairnIslands => "PN", "Pitcairn Islands", "PITCAIRN_ISLANDS", [
        "Pitcairn Group of Islands", "Pitcairn", "Pitcairn Henderson Ducie and Oeno Islands",
        "PCN",
    ];
    Peru => "PE", "Peru", "PERU", ["Republic of Peru", "República del Perú", "PER"];
    Philippines => "PH", "Philippines", "PHILIPPINES", [
        "Republic of the Philippines", "Repúblika ng Pilipinas", "PHL", "PHI",
    ];
    Palau => "PW", "Palau", "PALAU", ["Republic of Palau", "Beluu er a Belau", "PLW"];
    PapuaNewGuinea => "PG", "Papua New Guinea", "PAPUA_NEW_GUINEA", [
        "Independent State of Papua New Guinea", "Independen Stet bilong Papua Niugini", "PNG",
    ];
    Poland => "PL", "Poland", "POLAND", ["Republic of Poland", "Rzeczpospolita Polska", "POL"];
    PuertoRico => "PR", "Puerto Rico", "PUERTO_RICO", [
        "Commonwealth of Puerto Rico", "Estado Libre Asociado de Puerto Rico", "PRI", "PUR",
    ];
    NorthKorea => "KP", "North Korea", "NORTH_KOREA", [
        "Democratic People's Republic of Korea", "조선민주주의인민공화국",
        "Chosŏn Minjujuŭi Inmin Konghwaguk", "Korea, Democratic People's Republic of", "PRK",
    ];
    Portugal => "PT", "Portugal", "PORTUGAL", [
        "Portuguese Republic", "Portuguesa", "República Portuguesa", "PRT", "POR",
    ];
    Paraguay => "PY", "Paraguay", "PARAGUAY", [
        "Republic of Paraguay", "República del Paraguay", "Tetã Paraguái", "PRY", "PAR",
    ];
    Palestine => "PS", "Palestine", "PALESTINE", [
        "State of Palestine", "Palestine, State of", "Dawlat Filasṭin", "PSE", "PLE",
    ];
    FrenchPolynesia => "PF", "French Polynesia", "FRENCH_POLYNESIA", [
        "Polynésie française", "Pōrīnetia Farāni", "PYF",
    ];
    Qatar => "QA", "Qatar", "QATAR", ["State of Qatar", "Dawlat Qaṭar", "QAT"];
    Reunion => "RE", "Réunion Island", "REUNION", ["Reunion", "REU"];
    Romania => "RO", "Romania", "ROMANIA", ["Rumania", "Roumania", "România", "ROU"];
    Russia => "RU", "Russia", "RUSSIA", ["Russian Federation", "Российская Федерация", "RUS"];
    Rwanda => "RW", "Rwanda", "RWANDA", [
        "Republic of Rwanda", "Repubulika y'u Rwanda", "République du Rwanda", "RWA",
    ];
    SaudiArabia => "SA", "Saudi Arabia", "SAUDI_ARABIA", [
        "Kingdom of Saudi Arabia", "Saudi", "Al-Mamlakah al-‘Arabiyyah as-Su‘ūdiyyah", "SAU",
        "KSA",
    ];
    Sudan => "SD", "Sudan", "SUDAN", ["Republic of the Sudan", "Jumhūrīyat as-Sūdān", "SDN", "SUD"];
    Senegal => "SN", "Senegal", "SENEGAL", ["Republic of Senegal", "République du Sénégal", "SEN"];
    Singapore => "SG", "Singapore", "SINGAPORE", [
        "Republic of Singapore", "Singapura", "Republik Singapura", "新加坡共和国", "SGP", "SIN",
    ];
    SouthGeorgia => "GS", "South Georgia", "SOUTH_GEORGIA", [
        "South Georgia and the South Sandwich Islands", "SGS",
    ];
    SvalbardAndJanMayen => "SJ", "Svalbard and Jan Mayen", "SVALBARD_AND_JAN_MAYEN", [
        "Svalbard og Jan Mayen", "Svalbard and Jan Mayen Islands", "SJM",
    ];
    SolomonIslands => "SB", "Solomon Islands", "SOLOMON_ISLANDS", ["SLB", "SOL"];
    SierraLeone => "SL", "Sierra Leone", "SIERRA_LEONE", ["Republic of Sierra Leone", "SLE"];
    ElSalvador => "SV", "El Salvador", "EL_SALVADOR", [
        "Republic of El Salvador", "República de El Salvador", "SLV", "ESA",
    ];
    SanMarino => "SM", "San Marino", "SAN_MARINO", [
        "Most Serene Republic of San Marino", "Republic of San Marino", "Repubblica di San Marino",
        "SMR",
    ];
    Somalia => "SO", "Somalia", "SOMALIA", [
        "Federal Republic of Somalia", "aṣ-Ṣūmāl", "Jamhuuriyadda Federaalka Soomaaliya",
        "Jumhūriyyat aṣ-Ṣūmāl al-Fiderāliyya", "SOM",
    ];
    SaintPierreAndMiquelon => "PM", "Saint Pierre and Miquelon", "SAINT_PIERRE_AND_MIQUELON", [
        "Collectivité territoriale de Saint-Pierre-et-Miquelon", "SPM",
    ];
    Serbia => "RS", "Serbia", "SERBIA", [
        "Republic of Serbia", "Srbija", "Република Србија", "Republika Srbija", "SRB",
    ];
    SouthSudan => "SS", "South Sudan", "SOUTH_SUDAN", ["Republic of South Sudan", "SSD"];
    SaoTomeAndPrincipe => "ST", "São Tomé and Príncipe", "SAO_TOME_AND_PRINCIPE", [
        "Democratic Republic of São Tomé and Príncipe",
        "República Democrática de São Tomé e Príncipe", "STP",
    ];
    Suriname => "SR", "Suriname", "SURINAME", [
        "Republic of Suriname", "Sarnam", "Sranangron", "Republiek Suriname", "SUR",
    ];
    Slovakia => "SK", "Slovakia", "SLOVAKIA", ["Slovak Republic", "Slovenská republika", "SVK"];
    Slovenia => "SI", "Slovenia", "SLOVENIA", [
        "Republic of Slovenia", "Republika Slovenija", "SVN", "SLO",
    ];
    Sweden => "SE", "Sweden", "SWEDEN", ["Kingdom of Sweden", "Konungariket Sverige", "SWE"];
    Swaziland => "SZ", "Swaziland", "SWAZILAND", [
        "Kingdom of Swaziland", "weSwatini", "Swatini", "Ngwane", "Umbuso waseSwatini", "SWZ",
    ];
    SintMaarten => "SX", "Sint Maarten", "SINT_MAARTEN", ["Sint Maarten (Dutch part)", "SXM"];
    Seychelles => "SC", "Seychelles", "SEYCHELLES", [
        "Republic of Seychelles", "Repiblik Sesel", "République des Seychelles", "SYC", "SEY",
    ];
    Syria => "SY", "Syria", "SYRIA", [
        "Syrian Arab Republic", "Al-Jumhūrīyah Al-ʻArabīyah As-Sūrīyah", "SYR",
    ];
    TurksAndCaicosIslands => "TC", "Turks and Caicos Islands", "TURKS_AND_CAICOS_ISLANDS", ["TCA"];
    Chad => "TD", "Chad", "CHAD", [
        "Republic of Chad", "Tchad", "République du Tchad", "TCD", "CHA",
    ];
    Togo => "TG", "Togo", "TOGO", [
        "Togolese Republic", "Togolese", "République Togolaise", "TGO", "TOG",
    ];
    Thailand => "TH", "Thailand", "THAILAND", [
        "Kingdom of Thailand", "Prathet", "Thai", "ราชอาณาจักรไทย", "Ratcha Anachak Thai", "THA",
    ];
    Tajikistan => "TJ", "Tajikistan", "TAJIKISTAN", [
        "Republic of Tajikistan", "Toçikiston", "Ҷумҳурии Тоҷикистон", "Çumhuriyi Toçikiston",
        "TJK",
    ];
    Tokelau => "TK", "Tokelau", "TOKELAU", ["TKL"];
    Turkmenistan => "TM", "Turkmenistan", "TURKMENISTAN", ["TKM"];
    TimorLeste => "TL", "Timor-Leste", "TIMOR_LESTE", [
        "Democratic Republic of Timor-Leste", "East Timor", "República Democrática de Timor-Leste",
        "Repúblika Demokrátika Timór-Leste", "Timór Lorosa'e", "Timor Lorosae", "TLS",
    ];
    Tonga => "TO", "Tonga", "TONGA", ["Kingdom of Tonga", "TON", "TGA"];
    TrinidadAndTobago => "TT", "Trinidad and Tobago", "TRINIDAD_AND_TOBAGO", [
        "Republic of Trinidad and Tobago", "TTO",
    ];
    Tunisia => "TN", "Tunisia", "TUNISIA", [
        "Tunisian Republic", "Republic of Tunisia", "al-Jumhūriyyah at-Tūnisiyyah", "TUN",
    ];
    Turkey => "TR", "Turkey", "TURKEY", [
        "Republic of Turkey", "Turkiye", "Türkiye Cumhuriyeti", "TUR",
    ];
    Tuvalu => "TV", "Tuvalu", "TUVALU", ["TUV"];
    Taiwan => "TW", "Taiwan", "TAIWAN", [
        "Republic of China (Taiwan)", "Táiwān", "Republic of China", "中華民國", "Zhōnghuá Mínguó",
        "Chinese Taipei", "TWN", "TPE",
    ];
    Tanzania => "TZ", "Tanzania", "TANZANIA", [
        "United Republic of Tanzania", "Tanzania, United Republic of",
        "Jamhuri ya Muungano wa Tanzania", "TZA", "TAN",
    ];
    Uganda => "UG", "Uganda", "UGANDA", ["Republic of Uganda", "Jamhuri ya Uganda", "UGA"];
    Ukraine => "UA", "Ukraine", "UKRAINE", ["Ukrayina", "UKR"];
    UnitedStatesMinorOutlyingIslands => "UM", "United States Minor Outlying Islands", "UNITED_STATES_MINOR_OUTLYING_ISLANDS", [
        "UMI",
    ];
    Uruguay => "UY", "Uruguay", "URUGUAY", [
        "Oriental Republic of Uruguay", "República Oriental del Uruguay", "URY", "URU",
    ];
    UnitedStates => "US", "United States of America", "UNITED_STATES", ["USA"];
    Uzbekistan => "UZ", "Uzbekistan", "UZBEKISTAN", [
        "Republic of Uzbekistan", "O‘zbekiston Respublikasi", "Ўзбекистон Республикаси", "UZB",
    ];
    VaticanCity => "VA", "Vatican City", "VATICAN_CITY", [
        "Vatican City State", "Holy See (Vatican City State)", "Stato della Città del Vaticano",
        "VAT",
    ];
    SaintVincentAndTheGrenadines => "VC", "Saint Vincent and the Grenadines", "SAINT_VINCENT_AND_THE_GRENADINES", [
        "VCT", "VIN",
    ];
    Venezuela => "VE", "Venezuela", "VENEZUELA", [
        "Bolivarian Republic of Venezuela", "Venezuela, Bolivarian Republic of",
        "República Bolivariana de Venezuela", "VEN",
    ];
    BritishVirginIslands => "VG", "Virgin Islands", "BRITISH_VIRGIN_ISLANDS", [
        "Virgin Islands, British", "VGB", "IVB",
    ];
    UnitedStatesVirginIslands => "VI", "Virgin Islands of the United States", "UNITED_STATES_VIRGIN_ISLANDS", [
        "Virgin Islands, U.S.", "VIR", "ISV",
    ];
    Vietnam => "VN", "Vietnam", "VIETNAM", [
        "Socialist Republic of Vietnam", "Cộng hòa Xã hội chủ nghĩa Việt Nam", "Viet Nam", "VNM",
        "VIE",
    ];
    Vanuatu => "VU", "Vanuatu", "VANUATU", [
        "Republic of Vanuatu", "Ripablik blong Vanuatu", "République de Vanuatu", "VUT", "VAN",
    ];
    WallisAndFutuna => "WF", "Wallis and Futuna", "WALLIS_AND_FUTUNA", [
        "Territory of the Wallis and Futuna Islands", "Territoire des îles Wallis et Futuna",
        "WLF",
    ];
    Samoa => "WS", "Samoa", "SAMOA", [
        "Independent State of Samoa", "Malo Saʻoloto Tutoʻatasi o Sāmoa", "WSM", "SAM",
    ];
    Yemen => "YE", "Yemen", "YEMEN", [
        "Republic of Yemen", "Yemeni Republic", "al-Jumhūriyyah al-Yamaniyyah", "YEM",
    ];
    SouthAfrica => "ZA", "South Africa", "SOUTH_AFRICA", [
        "Republic of South Africa", "RSA", "Suid-Afrika", "ZAF",
    ];
    Zambia => "ZM", "Zambia", "ZAMBIA", ["Republic of Zambia", "ZMB", "ZAM"];
    Zimbabwe => "ZW", "Zimbabwe", "ZIMBABWE", ["Republic of Zimbabwe", "ZWE", "ZIM"];
}
