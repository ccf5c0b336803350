//! Built-in English inflection tables
//!
//! Order matters in every rule table: narrow suffixes are listed before the
//! general ones they overlap with (`xis` and `sis` before `s`, `ay`/`ey`
//! before `y`, and so on).

/// Singular suffix → plural suffix
pub const PLURAL_RULES: &[(&str, &str)] = &[
    ("(ind|vert)ex", "${1}ices"),
    (
        "(alumn|bacill|cact|foc|fung|nucle|radi|stimul|syllab|termin|vir)us",
        "${1}i",
    ),
    ("(buffal|tomat)o", "${1}oes"),
    ("x", "xes"),
    ("ch", "ches"),
    ("sh", "shes"),
    ("ss", "sses"),
    ("ay", "ays"),
    ("ey", "eys"),
    ("iy", "iys"),
    ("oy", "oys"),
    ("uy", "uys"),
    ("y", "ies"),
    ("ao", "aos"),
    ("eo", "eos"),
    ("io", "ios"),
    ("oo", "oos"),
    ("uo", "uos"),
    ("o", "os"),
    ("us", "uses"),
    ("cis", "ces"),
    ("sis", "ses"),
    ("xis", "xes"),
    ("zoon", "zoa"),
    ("itis", "itis"),
    ("ois", "ois"),
    ("pox", "pox"),
    ("ox", "oxes"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    ("quiz", "quizzes"),
    ("alias", "aliases"),
    ("alf", "alves"),
    ("elf", "elves"),
    ("olf", "olves"),
    ("arf", "arves"),
    ("nife", "nives"),
    ("life", "lives"),
];

/// Plural suffix → singular suffix
///
/// This is [`PLURAL_RULES`] inverted, with two corrections. The three
/// capture-group rules cannot be inverted mechanically, so their reverse forms
/// lead the table. `xes` is produced by both `x` and `xis`; it maps back to
/// `x`, and `-xis` words belong in [`IRREGULAR`]. Later duplicates of an
/// inverted pattern are dropped.
pub const SINGULAR_RULES: &[(&str, &str)] = &[
    ("(ind|vert)ices", "${1}ex"),
    (
        "(alumn|bacill|cact|foc|fung|nucle|radi|stimul|syllab|termin|vir)i",
        "${1}us",
    ),
    ("(buffal|tomat)oes", "${1}o"),
    ("xes", "x"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("sses", "ss"),
    ("ays", "ay"),
    ("eys", "ey"),
    ("iys", "iy"),
    ("oys", "oy"),
    ("uys", "uy"),
    ("ies", "y"),
    ("aos", "ao"),
    ("eos", "eo"),
    ("ios", "io"),
    ("oos", "oo"),
    ("uos", "uo"),
    ("os", "o"),
    ("uses", "us"),
    ("ces", "cis"),
    ("ses", "sis"),
    ("zoa", "zoon"),
    ("itis", "itis"),
    ("ois", "ois"),
    ("pox", "pox"),
    ("oxes", "ox"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("teeth", "tooth"),
    ("quizzes", "quiz"),
    ("aliases", "alias"),
    ("alves", "alf"),
    ("elves", "elf"),
    ("olves", "olf"),
    ("arves", "arf"),
    ("nives", "nife"),
    ("lives", "life"),
];

/// Singular → plural pairs matched as literal suffixes in both directions
pub const IRREGULAR: &[(&str, &str)] = &[
    ("matrix", "matrices"),
    ("leaf", "leaves"),
    ("loaf", "loaves"),
    ("move", "moves"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("genus", "genera"),
    ("sex", "sexes"),
    ("ox", "oxen"),
    ("child", "children"),
    ("man", "men"),
    ("tooth", "teeth"),
    ("person", "people"),
    ("wife", "wives"),
    ("mythos", "mythoi"),
    ("testis", "testes"),
    ("numen", "numina"),
    ("quiz", "quizzes"),
    ("alias", "aliases"),
    // "-us" reads as singular ("bus"), so "menus" needs an explicit reverse
    ("menu", "menus"),
];

/// Whole words with identical singular and plural forms (lowercase)
pub const UNCOUNTABLE: &[&str] = &[
    "sheep",
    "fish",
    "deer",
    "series",
    "species",
    "money",
    "rice",
    "information",
    "equipment",
    "news",
    "people",
];

/// Plural nouns that never take an `s`, left unchanged in both directions
///
/// Matched as suffixes, so `metadata` and `multimedia` are covered.
pub const AMBIGUOUS: &[&str] = &[
    "data",
    "media",
    "criteria",
    "phenomena",
    "bacteria",
    "errata",
    "strata",
];
