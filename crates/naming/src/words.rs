pub(crate) const GALAXY_PREFIXES: &[&str] = &[
    "Andra", "Vela", "Corvus", "Lyra", "Serpen", "Carina", "Pavo", "Tucana", "Fornax",
    "Sculpt", "Aquil", "Auriga", "Bootes", "Cassio", "Cephe", "Dorad", "Eridan", "Grus",
    "Hercul", "Indus", "Lacert", "Lepus", "Lupus", "Mensa", "Norma", "Octan", "Pegas",
    "Persei", "Phoen", "Pictor", "Pyxis", "Reticul", "Sagitt", "Scut", "Sextan", "Triang",
    "Volans", "Vulpec", "Antlia", "Caelum", "Chamael", "Circin", "Columb", "Crater",
    "Delphin", "Equul", "Horolog", "Musca", "Apus", "Ara",
];

pub(crate) const GALAXY_SUFFIXES: &[&str] = &[
    "meda", "nis", "lon", "ium", "oris", "ax", "rion", "thea", "ura", "lix", "tos", "dor",
    "ven", "cus", "mir", "zar", "lyx", "mos", "nea", "tis", "gard", "zul", "fen", "tor",
    "trix", "nyx", "vel", "grim", "nar", "rus", "bex", "fir", "mun", "dax", "tyr", "vos",
    "ryn", "zed", "xis", "nol", "thys", "gos", "vyr", "xan", "pel", "fyn", "lor", "dyn",
];

pub(crate) const PLANET_PREFIXES: &[&str] = &[
    "Kael", "Orin", "Vest", "Tal", "Myr", "Bryn", "Cael", "Pyra", "Thal", "Ost", "Zeph",
    "Quor", "Lith", "Vor", "Nera", "Ashen", "Cind", "Drav", "Elun", "Fen", "Gor", "Hal",
    "Ister", "Jor", "Kess", "Lum", "Mor", "Nyl", "Ober", "Pell", "Rhen", "Sarn", "Tyr",
    "Ulth", "Vael", "Wyr", "Xyl", "Yss", "Zan", "Aur", "Bel", "Cor", "Dun", "Eth", "Fal",
];

pub(crate) const PLANET_SUFFIXES: &[&str] = &[
    "on", "us", "ia", "ara", "or", "es", "is", "ix", "ar", "eth", "um", "ax", "ys", "en",
    "ir", "os", "as", "ox", "un", "el", "yn", "ex", "an", "ea", "ae", "oth", "ine", "ua",
];

pub(crate) const SYSTEM_FIRST: &[&str] = &[
    "Ash", "Frost", "Ember", "Tide", "Glass", "Iron", "Silver", "Amber", "Cinder", "Hollow",
    "Quiet", "Drift", "Lantern", "Veil", "Crown", "Stone", "Salt", "Thorn", "Rain", "Spire",
    "Harbor", "Bright", "Pale", "Deep", "Far", "Last", "First", "Wild", "Still", "Broken",
    "Golden", "Burning", "Falling", "Sleeping", "Wandering", "Hidden", "Silent", "Crimson",
];

pub(crate) const SYSTEM_LINK: &[&str] = &[
    "of", "beyond", "under", "past", "near", "over", "behind", "below", "without", "along",
    "at", "by", "toward", "inside", "outside", "around",
];

pub(crate) const SYSTEM_LAST: &[&str] = &[
    "Reach", "Verge", "Meridian", "Expanse", "Hearth", "Haven", "Threshold", "Cradle",
    "Frontier", "Deep", "Vault", "Crossing", "Wake", "Tides", "Embers", "Lanterns", "Mirrors",
    "Storms", "Shoals", "Ruins", "Gardens", "Spires", "Voices", "Winters", "Summers",
    "Kings", "Wanderers", "Sleepers", "Echoes", "Stars", "Depths", "Heights",
];
