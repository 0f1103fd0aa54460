//! Shade-name tables for the color families.
//!
//! One `(name, palette index)` pair per named shade, in declaration order.
//! The `std_` prefix marks the entries that coincide with the classic
//! 16-color palette.

pub(crate) static RED: &[(&str, u8)] = &[
    ("std_Red", 1),
    ("std_Bright_Red", 9),
    ("Dark_Blood_Red", 52),
    ("Deep_Red", 88),
    ("Dark_Red", 124),
    ("Bright_Red", 160),
    ("Rust_Red", 167),
    ("Pure_Red", 196),
    ("Blush_Red", 203),
    ("Rosy_Red", 210),
    ("Pastel_Red", 217),
];

pub(crate) static GREEN: &[(&str, u8)] = &[
    ("std_Green", 2),
    ("std_Bright_Green", 10),
    ("Dark_Green", 22),
    ("Medium_Green", 28),
    ("Deep_Sea_Green", 29),
    ("Spring_Green", 34),
    ("Jade_Green", 35),
    ("Lime_Green", 40),
    ("Light_Spring_Green", 41),
    ("Caribbean_Green", 42),
    ("Pure_Green", 46),
    ("Vibrant_Spring_Green", 47),
    ("Soft_Spring_Green", 48),
    ("Brilliant_Spring_Green", 49),
    ("Dark_Olive_Green", 58),
    ("Olive_Green", 64),
    ("Glade_Green", 65),
    ("Kelly_Green", 70),
    ("Dark_Sea_Green", 71),
    ("Cadet_Green", 72),
    ("Strong_Green", 76),
    ("Moderate_Lime_Green", 77),
    ("Sea_Green", 78),
    ("Chartreuse", 82),
    ("Light_Lime_Green", 83),
    ("Light_Sea_Green", 84),
    ("Luminous_Spring_Green", 85),
    ("Clay_Creek_Green", 101),
    ("Apple_Green", 106),
    ("Asparagus_Green", 107),
    ("Pistachio_Green", 112),
    ("Mantis_Green", 113),
    ("Pale_Green", 114),
    ("Bright_Chartreuse", 118),
    ("Light_Green", 119),
    ("Soft_Green", 120),
    ("Mint_Green", 121),
    ("Green_Yellow", 148),
    ("June_Bud_Green", 149),
    ("Pastel_Lime", 150),
    ("Grayish_Lime_Green", 151),
    ("Spring_Bud_Green", 154),
    ("Pastel_Sea_Green", 155),
    ("Seafoam_Green", 156),
    ("Caladon_Green", 157),
    ("Tea_Green", 193),
    ("Pastel_Green", 194),
];

pub(crate) static BLUE: &[(&str, u8)] = &[
    ("std_Blue", 4),
    ("std_Bright_Blue", 12),
    ("Dark_Navy_Blue", 17),
    ("Deep_Navy_Blue", 18),
    ("Navy_Blue", 19),
    ("Dark_Blue", 20),
    ("Deep_Blue", 21),
    ("Deep_Sky_Blue", 25),
    ("Science_Blue", 26),
    ("Pure_Blue", 27),
    ("Ocean_Blue", 32),
    ("Vivid_Blue", 33),
    ("Cerulean_Blue", 38),
    ("Azure_Blue", 39),
    ("Vivid_Sky_Blue", 45),
    ("Misty_Slate_Blue", 60),
    ("Comet_Blue", 61),
    ("Slate_Blue", 62),
    ("Bright_Blue", 63),
    ("Lochmara_Blue", 67),
    ("Steel_Blue", 68),
    ("Light_Slate_Blue", 69),
    ("Aegean_Blue", 74),
    ("Iceberg_Blue", 75),
    ("Dusky_Sky_Blue", 81),
    ("Dusky_Cobalt_Blue", 103),
    ("Soft_Indigo_Blue", 104),
    ("Misty_Cornflower_Blue", 105),
    ("Horizon_Blue", 110),
    ("Soft_Sky_Blue", 111),
    ("Light_Pearl_Blue", 146),
    ("Light_Steel_Blue", 147),
    ("Pastel_Blue", 153),
    ("Pale_Blue", 189),
];

pub(crate) static CYAN: &[(&str, u8)] = &[
    ("std_Cyan", 6),
    ("std_Bright_Cyan", 14),
    ("Dark_Cyan", 23),
    ("Deep_Cyan", 24),
    ("Dark_Turquoise", 30),
    ("Medium_Turquoise", 31),
    ("Rich_Cyan", 36),
    ("Tiffany_Cyan", 37),
    ("Lagoon_Cyan", 43),
    ("Vibrant_Turquoise", 44),
    ("Pure_Cyan", 50),
    ("Aqua_Cyan", 51),
    ("Juniper_Cyan", 66),
    ("Harbor_Cyan", 73),
    ("Myrtle_Cyan", 79),
    ("Tidewater_Cyan", 80),
    ("Reef_Cyan", 86),
    ("Frost_Cyan", 87),
    ("Pewter_Cyan", 109),
    ("Sage_Cyan", 115),
    ("Bermuda_Cyan", 116),
    ("Morning_Mist_Cyan", 117),
    ("Aquamarine_Cyan", 122),
    ("Opal_Cyan", 123),
    ("Shallows_Cyan", 152),
    ("Algae_Cyan", 158),
    ("Glacier_Cyan", 159),
    ("Ebb_Tide_Cyan", 195),
];

pub(crate) static YELLOW: &[(&str, u8)] = &[
    ("std_Yellow", 3),
    ("std_Bright_Yellow", 11),
    ("Mustard_Yellow", 100),
    ("Light_Gold", 142),
    ("Dark_Khaki", 143),
    ("Light_Khaki", 144),
    ("Deep_Yellow", 178),
    ("Strong_Yellow", 184),
    ("Mellow_Yellow", 185),
    ("Muted_Yellow", 186),
    ("Soft_Yellow", 187),
    ("Neon_Yellow", 190),
    ("Bright_Lemon", 191),
    ("Lemon_Lime", 192),
    ("Amber", 220),
    ("Honey_Yellow", 221),
    ("Marigold_Yellow", 222),
    ("Pure_Yellow", 226),
    ("Golden_Yellow", 227),
    ("Pastel_Yellow", 228),
    ("Light_Yellow", 229),
    ("Pale_Yellow", 230),
];

pub(crate) static PURPLE: &[(&str, u8)] = &[
    ("std_Purple", 5),
    ("Imperial_Purple", 53),
    ("Velvet_Plum_Purple", 90),
    ("Mystic_Amethyst_Purple", 91),
    ("Smokey_Orchid_Purple", 96),
    ("Velvet_Magenta_Purple", 126),
    ("Heliotrope_Purple", 127),
    ("Orchid_Purple", 128),
    ("Fuchsia_Purple", 129),
    ("Lilac_Purple", 133),
    ("Heather_Purple", 134),
    ("Mauve_Purple", 139),
    ("Electric_Fuchsia_Purple", 164),
    ("Orchid_Magenta_Purple", 165),
    ("Light_Magenta_Purple", 170),
    ("Haze_Purple", 171),
    ("Pastel_Orchid_Purple", 176),
    ("Radiant_Amethyst_Purple", 201),
    ("Pastel_Fuchsia_Purple", 207),
    ("Cotton_Candy_Purple", 213),
    ("Pastel_Plum_Purple", 219),
];

pub(crate) static ORANGE: &[(&str, u8)] = &[
    ("Dark_Orange", 130),
    ("Strong_Orange", 166),
    ("Burnt_Orange", 172),
    ("Pure_Orange", 202),
    ("Amber", 208),
    ("Coral_Orange", 209),
    ("Golden_Orange", 214),
    ("Sandy_Orange", 215),
];

pub(crate) static BROWN: &[(&str, u8)] = &[
    ("Russet_Brown", 94),
    ("Brick_Rose_Brown", 95),
    ("Chestnut_Brown", 131),
    ("Dark_Goldenrod_Brown", 136),
    ("Desert_Sand_Brown", 137),
    ("Dusty_Taupe_Brown", 138),
    ("Copperfield_Brown", 173),
    ("Sandstone_Brown", 179),
    ("Light_Sandstone_Brown", 180),
    ("Pale_Chestnut_Brown", 181),
    ("Pastel_Moccasin_Brown", 223),
];

pub(crate) static VIOLET: &[(&str, u8)] = &[
    ("Deep_Orchid_Violet", 54),
    ("Amethyst_Violet", 55),
    ("Orchid_Violet", 56),
    ("Blue_Violet", 57),
    ("Strong_Violet", 92),
    ("Electric_Violet", 93),
    ("Smokey_Amethyst_Violet", 97),
    ("Dusty_Lavender_Violet", 98),
    ("Munstead_Violet", 99),
    ("Light_Violet", 135),
    ("Hazy_Lilac_Violet", 140),
    ("Lavender_Violet", 141),
    ("Misty_Lavender_Violet", 177),
    ("Frosted_Lavender_Violet", 182),
    ("Pearl_Violet", 183),
];

pub(crate) static PINK: &[(&str, u8)] = &[
    ("std_Pink", 13),
    ("Dark_Pink", 89),
    ("Raspberry_Rose_Pink", 125),
    ("Peony_Pink", 132),
    ("Vivid_Pink", 161),
    ("Deep_Fuchsia_Pink", 162),
    ("Fuchsia_Pink", 163),
    ("Rosebud_Pink", 168),
    ("Dreamy_Raspberry_Pink", 169),
    ("Blush_Rose_Pink", 174),
    ("Rose_Quartz_Pink", 175),
    ("Vivid_Raspberry_Pink", 197),
    ("Neon_Rose_Pink", 198),
    ("Dragonfruit_Pink", 199),
    ("Electric_Magenta_Pink", 200),
    ("Watermelon_Candy_Pink", 204),
    ("Cherry_Blossom_Pink", 205),
    ("Silk_Rose_Pink", 206),
    ("Tickle_Me_Pink", 211),
    ("Princess_Perfume_Pink", 212),
    ("Rosewater_Pink", 218),
    ("Powder_Pink", 224),
];

pub(crate) static BLACK: &[(&str, u8)] = &[
    ("std_Black", 0),
    ("Extended_Black", 16),
    ("Vampire_Black", 232),
    ("Nightshade_Black", 233),
];

pub(crate) static GRAY: &[(&str, u8)] = &[
    ("std_Gray", 8),
    ("Granite_Gray", 59),
    ("Smoke_Gray", 102),
    ("Fog_Gray", 145),
    ("Frosted_Gray", 188),
    ("Soot_Gray", 234),
    ("Graphite_Gray", 235),
    ("Charcoal_Gray", 236),
    ("Dusty_Charcoal_Gray", 237),
    ("Slate_Gray", 238),
    ("Gravel_Gray", 239),
    ("Shadow_Gray", 240),
    ("Nickel_Gray", 241),
    ("Mercury_Gray", 242),
    ("Dove_Gray", 243),
    ("Flint_Gray", 244),
    ("Driftwood_Gray", 245),
    ("Stone_Gray", 246),
    ("Silver_Gray", 247),
    ("Concrete_Gray", 248),
    ("Aluminum_Gray", 249),
    ("Silver_Foil_Gray", 250),
    ("Chalk_Gray", 251),
    ("Marble_Gray", 252),
    ("Porcelain_Gray", 253),
    ("Snow_Gray", 254),
];

pub(crate) static WHITE: &[(&str, u8)] = &[
    ("std_White", 7),
    ("Snowflake_White", 15),
    ("Pure_White", 231),
    ("Pearl_White", 255),
];

pub(crate) static SHADES: &[(&str, u8)] = &[
    ("Shade1", 232),
    ("Shade2", 233),
    ("Shade3", 234),
    ("Shade4", 235),
    ("Shade5", 236),
    ("Shade6", 237),
    ("Shade7", 238),
    ("Shade8", 239),
    ("Shade9", 240),
    ("Shade10", 241),
    ("Shade11", 242),
    ("Shade12", 243),
    ("Shade13", 244),
    ("Shade14", 245),
    ("Shade15", 246),
    ("Shade16", 247),
    ("Shade17", 248),
    ("Shade18", 249),
    ("Shade19", 250),
    ("Shade20", 251),
    ("Shade21", 252),
    ("Shade22", 253),
    ("Shade23", 254),
    ("Shade24", 255),
];
