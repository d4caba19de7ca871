use super::{BookInfo, CanonicalBookId as B};

macro_rules! book {
    ($id:expr, $key:literal, $en:literal, $en_abbr:literal, $nl:literal, $nl_abbr:literal, [$($alias:literal),* $(,)?]) => {
        BookInfo {
            id: $id,
            key: $key,
            english: $en,
            english_abbr: $en_abbr,
            dutch: $nl,
            dutch_abbr: $nl_abbr,
            aliases: &[$($alias),*],
        }
    };
}

/// Catalogue rows in `CanonicalBookId` declaration order.
pub(super) static BOOKS: [BookInfo; 81] = [
    // Old Testament
    book!(B::Genesis, "Genesis", "Genesis", "Gen.", "Genesis", "Gen.",
        ["genesis", "gen", "ge", "gn"]),
    book!(B::Exodus, "Exodus", "Exodus", "Ex.", "Exodus", "Ex.",
        ["exodus", "ex", "exo", "exod"]),
    book!(B::Leviticus, "Leviticus", "Leviticus", "Lev.", "Leviticus", "Lev.",
        ["leviticus", "lev", "le", "levit", "lv"]),
    book!(B::Numbers, "Numbers", "Numbers", "Num.", "Numeri", "Num.",
        ["numeri", "numbers", "num", "nu", "numb", "nm", "nb"]),
    book!(B::Deuteronomy, "Deuteronomy", "Deuteronomy", "Deut.", "Deuteronomium", "Deut.",
        ["deuteronomium", "deuteronomy", "deut", "deu", "dt"]),
    book!(B::Joshua, "Joshua", "Joshua", "Josh.", "Jozua", "Joz.",
        ["jozua", "joshua", "joz", "jos", "jo", "josh"]),
    book!(B::Judges, "Judges", "Judges", "Judg.", "Richteren", "Richt.",
        ["richteren", "rechters", "richt", "rech", "ri", "judges", "judg", "jdg", "jgs"]),
    book!(B::Ruth, "Ruth", "Ruth", "Ruth", "Ruth", "Ruth",
        ["ruth", "ru", "rt", "rut", "rth"]),
    book!(B::Samuel1, "1Samuel", "1 Samuel", "1 Sam.", "1 Samuël", "1 Sam.",
        ["1 samuel", "1 sam", "i samuel", "i sam", "1 sm", "1sa", "1s"]),
    book!(B::Samuel2, "2Samuel", "2 Samuel", "2 Sam.", "2 Samuël", "2 Sam.",
        ["2 samuel", "2 sam", "ii samuel", "ii sam", "2 sm", "2sa", "2s"]),
    book!(B::Kings1, "1Kings", "1 Kings", "1 Kings", "1 Koningen", "1 Kon.",
        ["1 koningen", "1 kings", "1 kon", "i koningen", "i kon", "1 kgs", "1ki", "1k"]),
    book!(B::Kings2, "2Kings", "2 Kings", "2 Kings", "2 Koningen", "2 Kon.",
        ["2 koningen", "2 kings", "2 kon", "ii koningen", "ii kon", "2 kgs", "2ki", "2k"]),
    book!(B::Chronicles1, "1Chronicles", "1 Chronicles", "1 Chron.", "1 Kronieken", "1 Kron.",
        ["1 kronieken", "1 chronicles", "1 kron", "1 kr", "i kronieken", "i kron", "1 chr", "1 chron", "1ch"]),
    book!(B::Chronicles2, "2Chronicles", "2 Chronicles", "2 Chron.", "2 Kronieken", "2 Kron.",
        ["2 kronieken", "2 chronicles", "2 kron", "2 kr", "ii kronieken", "ii kron", "2 chr", "2 chron", "2ch"]),
    book!(B::Ezra, "Ezra", "Ezra", "Ezra", "Ezra", "Ezra",
        ["ezra", "ezr", "ez"]),
    book!(B::Nehemiah, "Nehemiah", "Nehemiah", "Neh.", "Nehemia", "Neh.",
        ["nehemia", "nehemiah", "neh", "ne"]),
    book!(B::Esther, "Esther", "Esther", "Est.", "Esther", "Est.",
        ["ester", "esther", "est", "es"]),
    book!(B::Job, "Job", "Job", "Job", "Job", "Job",
        ["job", "jb"]),
    book!(B::Psalms, "Psalms", "Psalms", "Ps.", "Psalmen", "Ps.",
        ["psalm", "psalms", "psalmen", "ps", "psa", "pss", "psm"]),
    book!(B::Proverbs, "Proverbs", "Proverbs", "Prov.", "Spreuken", "Spr.",
        ["spreuken", "proverbs", "spr", "sp", "prov", "pro", "pr", "prv"]),
    book!(B::Ecclesiastes, "Ecclesiastes", "Ecclesiastes", "Eccl.", "Prediker", "Pred.",
        ["prediker", "ecclesiastes", "pred", "eccl", "ecc", "ec", "qoh"]),
    book!(B::SongOfSolomon, "Song of Solomon", "Song of Solomon", "Song", "Hooglied", "Hoogl.",
        ["hooglied", "song of solomon", "song of songs", "hoogl", "hl", "lied der liederen", "ldl", "sos", "ss", "cant", "song"]),
    book!(B::Isaiah, "Isaiah", "Isaiah", "Isa.", "Jesaja", "Jes.",
        ["jesaja", "isaiah", "jes", "js", "isa", "is"]),
    book!(B::Jeremiah, "Jeremiah", "Jeremiah", "Jer.", "Jeremia", "Jer.",
        ["jeremia", "jeremiah", "jer", "je"]),
    book!(B::Lamentations, "Lam", "Lamentations", "Lam.", "Klaagliederen", "Klaagl.",
        ["klaagliederen", "lamentations", "klaagl", "kla", "lam", "la"]),
    book!(B::Ezekiel, "Ezekiel", "Ezekiel", "Ezek.", "Ezechiël", "Ez.",
        ["ezechiel", "ezekiel", "ezech", "eze", "ezk", "ek"]),
    book!(B::Daniel, "Daniel", "Daniel", "Dan.", "Daniël", "Dan.",
        ["daniel", "dan", "dn", "da"]),
    book!(B::Hosea, "Hosea", "Hosea", "Hos.", "Hosea", "Hos.",
        ["hosea", "hos", "ho"]),
    book!(B::Joel, "Joel", "Joel", "Joel", "Joël", "Joël",
        ["joel", "jl", "joe", "jol"]),
    book!(B::Amos, "Amos", "Amos", "Amos", "Amos", "Am.",
        ["amos", "am", "amo"]),
    book!(B::Obadiah, "Obadiah", "Obadiah", "Obad.", "Obadja", "Ob.",
        ["obadja", "obadiah", "ob", "obad", "oba"]),
    book!(B::Jonah, "Jonah", "Jonah", "Jon.", "Jona", "Jona",
        ["jona", "jonah", "jon", "jnh"]),
    book!(B::Micah, "Micah", "Micah", "Mic.", "Micha", "Micha",
        ["micha", "micah", "mi", "mic"]),
    book!(B::Nahum, "Nahum", "Nahum", "Nah.", "Nahum", "Nah.",
        ["nahum", "nah", "na"]),
    book!(B::Habakkuk, "Habakkuk", "Habakkuk", "Hab.", "Habakuk", "Hab.",
        ["habakuk", "habakkuk", "hab", "hb"]),
    book!(B::Zephaniah, "Zephaniah", "Zephaniah", "Zeph.", "Zefanja", "Zef.",
        ["sefanja", "zefanja", "zephaniah", "sef", "zef", "zep", "zph"]),
    book!(B::Haggai, "Haggai", "Haggai", "Hag.", "Haggaï", "Hag.",
        ["haggai", "hag", "hg"]),
    book!(B::Zechariah, "Zechariah", "Zechariah", "Zech.", "Zacharia", "Zach.",
        ["zacharia", "zechariah", "zach", "zac", "zec", "zch"]),
    book!(B::Malachi, "Malachi", "Malachi", "Mal.", "Maleachi", "Mal.",
        ["maleachi", "malachi", "mal"]),
    // New Testament
    book!(B::Matthew, "Matthew", "Matthew", "Matt.", "Mattheüs", "Matt.",
        ["matteus", "mattheüs", "matthéüs", "matth", "matthew", "mat", "matt", "mt"]),
    book!(B::Mark, "Mark", "Mark", "Mark", "Marcus", "Mark",
        ["marcus", "markus", "mark", "mar", "marc", "mr", "mk", "mrk"]),
    book!(B::Luke, "Luke", "Luke", "Luke", "Lucas", "Luk.",
        ["lucas", "lukas", "luke", "luc", "lc", "lu", "luk", "lk"]),
    book!(B::John, "John", "John", "John", "Johannes", "Joh.",
        ["johannes", "john", "joh", "jn"]),
    book!(B::Acts, "Acts", "Acts", "Acts", "Handelingen", "Hand.",
        ["handelingen", "acts", "hand", "hd", "hnd", "ac", "act"]),
    book!(B::Romans, "Romans", "Romans", "Rom.", "Romeinen", "Rom.",
        ["romeinen", "romans", "rom", "rm", "ro"]),
    book!(B::Corinthians1, "1Corinthians", "1 Corinthians", "1 Cor.", "1 Korinthe", "1 Kor.",
        ["1 korinthe", "1 korintiers", "1 corinthians", "1 kor", "1 cor", "i korinthe", "i kor", "1co"]),
    book!(B::Corinthians2, "2Corinthians", "2 Corinthians", "2 Cor.", "2 Korinthe", "2 Kor.",
        ["2 korinthe", "2 korintiers", "2 corinthians", "2 kor", "2 cor", "ii korinthe", "ii kor", "2co"]),
    book!(B::Galatians, "Galatians", "Galatians", "Gal.", "Galaten", "Gal.",
        ["galaten", "galatians", "gal", "ga", "glt"]),
    book!(B::Ephesians, "Ephesians", "Ephesians", "Eph.", "Efeze", "Ef.",
        ["efeze", "efeziers", "ephesians", "ef", "eph", "ep"]),
    book!(B::Philippians, "Philippians", "Philippians", "Phil.", "Filippenzen", "Fil.",
        ["filippenzen", "filipenzen", "philippians", "fil", "phil", "php", "pp"]),
    book!(B::Colossians, "Colossians", "Colossians", "Col.", "Kolossenzen", "Kol.",
        ["kolossenzen", "colossenzen", "colossians", "kol", "col", "co"]),
    book!(B::Thessalonians1, "1Thessalonians", "1 Thessalonians", "1 Thess.", "1 Thessalonicenzen", "1 Thess.",
        ["1 thessalonicenzen", "1 tessalonicenzen", "1 thessalonians", "1 thess", "1 thes", "1 tes", "1th", "i thessalonicenzen", "i thess", "i tes", "1ts"]),
    book!(B::Thessalonians2, "2Thessalonians", "2 Thessalonians", "2 Thess.", "2 Thessalonicenzen", "2 Thess.",
        ["2 thessalonicenzen", "2 tessalonicenzen", "2 thessalonians", "2 thess", "2 thes", "2 tes", "2th", "ii thessalonicenzen", "ii thess", "ii tes", "2ts"]),
    book!(B::Timothy1, "1Timothy", "1 Timothy", "1 Tim.", "1 Timotheüs", "1 Tim.",
        ["1 timoteus", "1 timotheus", "1 timothy", "1 tim", "1ti", "i timoteus", "i tim", "1tm"]),
    book!(B::Timothy2, "2Timothy", "2 Timothy", "2 Tim.", "2 Timotheüs", "2 Tim.",
        ["2 timoteus", "2 timotheus", "2 timothy", "2 tim", "2ti", "ii timoteus", "ii tim", "2tm"]),
    book!(B::Titus, "Titus", "Titus", "Titus", "Titus", "Tit.",
        ["titus", "tit", "ti", "tt"]),
    book!(B::Philemon, "Philemon", "Philemon", "Philem.", "Filemon", "Filem.",
        ["filemon", "philemon", "filem", "flm", "phm", "pm", "phlm"]),
    book!(B::Hebrews, "Hebrews", "Hebrews", "Heb.", "Hebreeën", "Hebr.",
        ["hebreeen", "hebrews", "hebr", "heb", "he"]),
    book!(B::James, "James", "James", "Jas.", "Jakobus", "Jak.",
        ["jakobus", "jacobus", "james", "jak", "jac", "jas", "jms", "jam", "jm"]),
    book!(B::Peter1, "1Peter", "1 Peter", "1 Pet.", "1 Petrus", "1 Petr.",
        ["1 petrus", "1 peter", "1 petr", "1 pet", "1pe", "i petrus", "i petr", "i pet", "1pt", "1p"]),
    book!(B::Peter2, "2Peter", "2 Peter", "2 Pet.", "2 Petrus", "2 Petr.",
        ["2 petrus", "2 peter", "2 petr", "2 pet", "2pe", "ii petrus", "ii petr", "ii pet", "2pt", "2p"]),
    book!(B::John1, "1John", "1 John", "1 John", "1 Johannes", "1 Joh.",
        ["1 johannes", "1 john", "1 joh", "1jn", "i johannes", "i joh", "1j"]),
    book!(B::John2, "2John", "2 John", "2 John", "2 Johannes", "2 Joh.",
        ["2 johannes", "2 john", "2 joh", "2jn", "ii johannes", "ii joh", "2j"]),
    book!(B::John3, "3John", "3 John", "3 John", "3 Johannes", "3 Joh.",
        ["3 johannes", "3 john", "3 joh", "3jn", "iii johannes", "iii joh", "3j"]),
    book!(B::Jude, "Jude", "Jude", "Jude", "Judas", "Judas",
        ["judas", "jude", "jud", "jd"]),
    book!(B::Revelation, "Revelation", "Revelation", "Rev.", "Openbaring", "Openb.",
        ["openbaring", "revelation", "revelation of john", "openb", "opb", "op", "apocalyps", "apokalyps", "rev", "re", "rv"]),
    // Apocrypha
    book!(B::Tobit, "Tobit", "Tobit", "Tob.", "Tobit", "Tob.",
        ["tobit", "tobias", "tob"]),
    book!(B::Judith, "Judith", "Judith", "Jdt.", "Judit", "Jdt.",
        ["judit", "judith", "jdt"]),
    book!(B::Wisdom, "Wisdom", "Wisdom", "Wis.", "Wijsheid van Salomo", "Wijsh.",
        ["wijsheid", "wijsheid van salomo", "wijsh", "wis", "wisdom"]),
    book!(B::Sirach, "Sirach", "Sirach", "Sir.", "Jezus Sirach", "Sir.",
        ["sirach", "jezus sirach", "jesus sirach", "sir", "ecclesiasticus", "eccli"]),
    book!(B::Baruch, "Baruch", "Baruch", "Bar.", "Baruch", "Bar.",
        ["baruch", "bar"]),
    book!(B::LetterOfJeremiah, "Letter of Jeremiah", "Letter of Jeremiah", "Let. Jer.", "Brief van Jeremia", "Br. Jer.",
        ["brief van jeremia", "brief van jeremias", "brief jeremia", "letjer", "letter of jeremiah"]),
    book!(B::Maccabees1, "1Maccabees", "1 Maccabees", "1 Macc.", "1 Makkabeeën", "1 Makk.",
        ["1 makkabeeen", "1 makkabeen", "1 makk", "1 mak", "1 macc", "1 maccabeeen", "1 maccabees"]),
    book!(B::Maccabees2, "2Maccabees", "2 Maccabees", "2 Macc.", "2 Makkabeeën", "2 Makk.",
        ["2 makkabeeen", "2 makkabeen", "2 makk", "2 mak", "2 macc", "2 maccabeeen", "2 maccabees"]),
    book!(B::Maccabees3, "3Maccabees", "3 Maccabees", "3 Macc.", "3 Makkabeeën", "3 Makk.",
        ["3 makkabeeen", "3 makkabeen", "3 makk", "3 mak", "3 macc", "3 maccabeeen", "3 maccabees"]),
    book!(B::Maccabees4, "4Maccabees", "4 Maccabees", "4 Macc.", "4 Makkabeeën", "4 Makk.",
        ["4 makkabeeen", "4 makkabeen", "4 makk", "4 mak", "4 macc", "4 maccabeeen", "4 maccabees"]),
    book!(B::AdditionsToEsther, "Additions to Esther", "Additions to Esther", "Add. Esth.", "Toevoegingen bij Ester", "Toev. Est.",
        ["toevoegingen bij ester", "toevoegingen bij esther", "addesther", "additions to esther"]),
    book!(B::PrayerOfAzariah, "Prayer of Azariah", "Prayer of Azariah", "Pr. Azar.", "Gebed van Azarja", "Geb. Az.",
        ["gebed van azarja", "gebed azarja", "azariah", "song of the three", "songofthree", "prayer of azariah"]),
    book!(B::Susanna, "Susanna", "Susanna", "Sus.", "Susanna", "Sus.",
        ["susanna", "sus"]),
    book!(B::BelAndTheDragon, "Bel and the Dragon", "Bel and the Dragon", "Bel", "Bel en de draak", "Bel",
        ["bel en de draak", "bel en draak", "belandthedragon", "bel and the dragon"]),
    book!(B::PrayerOfManasseh, "Prayer of Manasseh", "Prayer of Manasseh", "Pr. Man.", "Gebed van Manasse", "Geb. Man.",
        ["gebed van manasse", "manasse", "prayer of manasseh"]),
];
