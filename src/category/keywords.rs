/// Keyword lists backing the ODS categorisation, keyed by category label.
///
/// Matching is exact string equality against tidied (lowercased, trimmed)
/// tags, so entries that are not lowercase can only match before tidying —
/// they are kept for parity with the curated list. A keyword may appear under
/// several categories; such tags yield multi-label results.
pub const ODS_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Arts / Culture / History",
        &[
            "arts",
            "culture",
            "history",
            "military",
            "art gallery",
            "design",
            "fashion",
            "museum",
            "historic centre",
            "conservation",
            "archaeology",
            "events",
            "theatre",
        ],
    ),
    (
        "Budget / Finance",
        &[
            "tenders",
            "contracts",
            "lgcs finance",
            "budget",
            "finance",
            "payment",
            "grants",
            "financial year",
            "council tax",
        ],
    ),
    (
        "Business and Economy",
        &[
            "business and economy",
            "business",
            "business and trade",
            "economic information",
            "economic development",
            "business grants",
            "business awards",
            "health and safety",
            "trading standards",
            "food safety",
            "business rates",
            "commercial land and property",
            "commercial waste",
            "pollution",
            "farming",
            "forestry",
            "crofting",
            "countryside",
            "farming",
            "emergency planning",
            "health and safety",
            "trading standards",
            "health and safety at work",
            "regeneration",
            "shopping",
            "shopping centres",
            "markets",
            "tenders",
            "contracts",
            "city centre management",
            "town centre management",
            "economy",
            "economic",
            "economic activity",
            "economic development",
            "deprivation",
            "scottish index of multiple deprivation",
            "simd",
            "business",
            "estimated population",
            "population",
            "labour force",
        ],
    ),
    (
        "Council and Government",
        &[
            "council buildings",
            "community development",
            "council and government",
            "council",
            "councils",
            "council tax",
            "benefits",
            "council grants",
            "grants",
            "council departments",
            "data protection",
            "FOI",
            "freedom of information",
            "council housing",
            "politicians",
            "MPs",
            "MSPs",
            "councillors",
            "elected members",
            "wards",
            "constituencies",
            "boundaries",
            "council minutes",
            "council agendas",
            "council plans",
            "council policies",
        ],
    ),
    (
        "Education",
        &[
            "primary schools",
            "lgcs education & skills",
            "education",
            "eductional",
            "library",
            "school meals",
            "schools",
            "school",
            "nurseries",
            "playgroups",
        ],
    ),
    (
        "Elections / Politics",
        &[
            "community councils",
            "political",
            "polling places",
            "elections",
            "politics",
            "elecorate",
            "election",
            "electoral",
            "electorate",
            "local authority",
            "council area",
            "democracy",
            "polling",
            "lgcs democracy",
            "democracy and governance",
            "local government",
            "councillor",
            "councillors",
            "community council",
        ],
    ),
    (
        "Food and Environment",
        &[
            "food",
            "school meals",
            "allotment",
            "public toilets",
            "air",
            "tree",
            "vacant and derelict land supply",
            "landscape",
            "nature",
            "rights of way",
            "tree preservation order",
            "preservation",
            "land",
            "contaminated",
            "green",
            "belt",
            "employment land audit",
            "environment",
            "forest woodland strategy",
            "waste",
            "recycling",
            "lgcs waste management",
            "water-network",
            "grafitti",
            "street occupations",
            "regeneration",
            "vandalism",
            "street cleansing",
            "litter",
            "toilets",
            "drains",
            "flytipping",
            "flyposting",
            "pollution",
            "air quality",
            "household waste",
            "commercial waste",
        ],
    ),
    (
        "Health and Social Care",
        &[
            "public toilets",
            "contraception",
            "implant",
            "cervical",
            "iud",
            "ius",
            "pis",
            "prescribing",
            "elderly",
            "screening",
            "screening programme",
            "cancer",
            "breast feeding",
            "defibrillators",
            "wards",
            "alcohol and drug partnership",
            "care homes",
            "waiting times",
            "drugs",
            "substance use",
            "pregnancy",
            "induced abortion",
            "therapeutic abortion",
            "termination",
            "abortion",
            "co-dependency",
            "sexual health",
            "outpatient",
            "waiting list",
            "stage of treatment",
            "daycase",
            "inpatient",
            "alcohol",
            "waiting time",
            "treatment",
            "community wellbeing and social environment",
            "health",
            "human services",
            "covid-19",
            "covid",
            "hospital",
            "health board",
            "health and social care partnership",
            "medicine",
            "health and social care",
            "health and fitness",
            "nhs24",
            "hospital admissions",
            "hospital mortality",
            "mental health",
            "pharmacy",
            "GP",
            "surgery",
            "fostering",
            "adoption",
            "social work",
            "asylum",
            "immigration",
            "citizenship",
            "carers",
        ],
    ),
    (
        "Housing and Estates",
        &[
            "buildings",
            "housing data supply 2020",
            "multiple occupation",
            "housing",
            "sheltered housing",
            "adaptations",
            "repairs",
            "council housing",
            "landlord",
            "landlord registration",
            "rent arrears",
            "parking",
            "garages",
            "homelessness",
            "temporary accommodation",
            "rent",
            "tenancy",
            "housing advice",
            "housing associations",
            "housing advice",
            "housing repairs",
            "lettings",
            "real estate",
            "land records",
            "land-cover",
            "woodland",
            "dwellings",
            "burial grounds",
            "cemeteries",
            "property",
            "vacant and derelict land",
            "scottish vacant and derelict land",
            "allotment",
        ],
    ),
    (
        "Law and Licensing",
        &[
            "law",
            "licensing",
            "regulation",
            "regulations",
            "licence",
            "licenses",
            "permit",
            "permits",
            "police",
            "court",
            "courts",
            "tribunal",
            "tribunals",
        ],
    ),
    (
        "Parks / Recreation",
        &["parks", "recreation", "woodland", "parks and open spaces"],
    ),
    (
        "Planning and Development",
        &[
            "buildings",
            "vacant and derelict land supply",
            "core paths. adopted",
            "employment land audit",
            "built environment",
            "planning",
            "zoning",
            "council area",
            "address",
            "addresses",
            "city development plan",
            "boundaries",
            "post-code",
            "dwellings",
            "planning permission",
            "postcode-units",
            "housing",
            "property",
            "building control",
            "conservation",
        ],
    ),
    (
        "Public Safety",
        &[
            "emergency planning",
            "public safety",
            "crime and justice",
            "lgcs community safety",
            "street lighting",
            "community safety",
            "cctv",
            "road safety",
        ],
    ),
    (
        "Sport and Leisure",
        &[
            "sport",
            "sports",
            "sports facilities",
            "sports activities",
            "countryside",
            "wildlife",
            "leisure",
            "leisure clubs",
            "clubs",
            "groups",
            "societies",
            "libraries",
            "archives",
            "local history",
            "heritage",
            "museums",
            "galleries",
            "parks",
            "gardens",
            "open spaces",
            "sports",
            "sports clubs",
            "leisure centres",
        ],
    ),
    (
        "Tourism",
        &[
            "public toilets",
            "tourism",
            "tourist",
            "attractions",
            "accomodation",
            "historic buildings",
            "tourist routes",
            "cafes",
            "restaurants",
            "hotels",
            "hotel",
        ],
    ),
    (
        "Transportation",
        &[
            "core paths. adopted",
            "lgcs transport infrastructure",
            "transportation",
            "mobility",
            "pedestrian",
            "walking",
            "walk",
            "cycle",
            "cycling",
            "parking",
            "car",
            "bus",
            "tram",
            "train",
            "taxi",
            "transport",
            "electric vehicle",
            "electric vehicle charging points",
            "transport / mobility",
            "active travel",
            "road safety",
            "roads",
            "community transport",
            "road works",
            "road closures",
            "speed limits",
            "port",
            "harbour",
        ],
    ),
];
