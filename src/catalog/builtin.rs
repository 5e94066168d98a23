/// Default league registry: (key, display name, ESPN league id).
///
/// Archives are stored as `<data dir>/<key>.json`.
pub const BUILTIN_LEAGUES: &[(&str, &str, &str)] = &[
    ("England_Premier_League", "Premier League", "eng.1"),
    ("Spain_Laliga", "LaLiga", "esp.1"),
    ("Germany_Bundesliga", "Bundesliga", "ger.1"),
    ("Argentina_Primera_Nacional", "Argentina - Primera Nacional", "arg.2"),
    ("Austria_Bundesliga", "Austria - Bundesliga", "aut.1"),
    ("Belgium_Jupiler_Pro_League", "Belgium - Jupiler Pro League", "bel.1"),
    ("Brazil_Serie_A", "Brazil - Serie A", "bra.1"),
    ("Brazil_Serie_B", "Brazil - Serie B", "bra.2"),
    ("Chile_Primera_Division", "Chile - Primera Division", "chi.1"),
    ("China_Super_League", "China - Super League", "chn.1"),
    ("Colombia_Primera_A", "Colombia - Primera A", "col.1"),
    ("England_National_League", "England - National League", "eng.5"),
    ("France_Ligue_1", "France - Ligue 1", "fra.1"),
    ("Greece_Super_League_1", "Greece - Super League 1", "gre.1"),
    ("Italy_Serie_A", "Italy - Serie A", "ita.1"),
    ("Japan_J1_League", "Japan - J1 League", "jpn.1"),
    ("Mexico_Liga_MX", "Mexico - Liga MX", "mex.1"),
    ("Netherlands_Eredivisie", "Netherlands - Eredivisie", "ned.1"),
    ("Paraguay_Division_Profesional", "Paraguay - Division Profesional", "par.1"),
    ("Peru_Primera_Division", "Peru - Primera Division", "per.1"),
    ("Portugal_Primeira_Liga", "Portugal - Primeira Liga", "por.1"),
    ("Romania_Liga_I", "Romania - Liga I", "rou.1"),
    ("Russia_Premier_League", "Russia - Premier League", "rus.1"),
    ("Saudi_Arabia_Pro_League", "Saudi Arabia - Pro League", "ksa.1"),
    ("Sweden_Allsvenskan", "Sweden - Allsvenskan", "swe.1"),
    ("Switzerland_Super_League", "Switzerland - Super League", "sui.1"),
    ("Turkey_Super_Lig", "Turkey - Super Lig", "tur.1"),
    ("USA_Major_League_Soccer", "USA - Major League Soccer", "usa.1"),
    ("Venezuela_Primera_Division", "Venezuela - Primera Division", "ven.1"),
    ("UEFA_Champions_League", "UEFA Champions League", "uefa.champions"),
    ("UEFA_Europa_League", "UEFA Europa League", "uefa.europa"),
    ("FIFA_Club_World_Cup", "FIFA Club World Cup", "fifa.cwc"),
];
