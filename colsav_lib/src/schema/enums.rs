//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Module with every enum of the classic save layout.
//!
//! Each declaration binds explicit integer values (they are sparse in several of them, so
//! never assume contiguity), the canonical name used by the tree codec, and the display
//! name used by the text dump. Values outside the declared sets appear in real saves; they
//! decode to `Unrecognized` and re-encode to the same bytes.

use crate::schema_enum;

schema_enum! {
    /// Goods as stored in 4-bit cargo slots. `goods` is what the modern model calls trade goods.
    Cargo4bitType, u8, "cargo_4bit_type", {
        Food = 0b0000, "food", "Food";
        Sugar = 0b0001, "sugar", "Sugar";
        Tobacco = 0b0010, "tobacco", "Tobacco";
        Cotton = 0b0011, "cotton", "Cotton";
        Furs = 0b0100, "furs", "Furs";
        Lumber = 0b0101, "lumber", "Lumber";
        Ore = 0b0110, "ore", "Ore";
        Silver = 0b0111, "silver", "Silver";
        Horses = 0b1000, "horses", "Horses";
        Rum = 0b1001, "rum", "Rum";
        Cigars = 0b1010, "cigars", "Cigars";
        Cloth = 0b1011, "cloth", "Cloth";
        Coats = 0b1100, "coats", "Coats";
        Goods = 0b1101, "goods", "Goods";
        Tools = 0b1110, "tools", "Tools";
        Muskets = 0b1111, "muskets", "Muskets";
    }
}

schema_enum! {
    /// Who controls one of the four european player slots.
    ControlType, u8, "control_type", {
        Player = 0x00, "player", "Player";
        Ai = 0x01, "ai", "AI";
        Withdrawn = 0x02, "withdrawn", "Withdrawn";
    }
}

schema_enum! {
    DifficultyType, u8, "difficulty_type", {
        Discoverer = 0x00, "discoverer", "Discoverer";
        Explorer = 0x01, "explorer", "Explorer";
        Conquistador = 0x02, "conquistador", "Conquistador";
        Governor = 0x03, "governor", "Governor";
        Viceroy = 0x04, "viceroy", "Viceroy";
    }
}

schema_enum! {
    EndOfTurnSignType, u16, "end_of_turn_sign_type", {
        NotShown = 0x0000, "not_shown", "Not Shown";
        Flashing = 0x0001, "flashing", "Flashing";
    }
}

schema_enum! {
    FortificationLevelType, u8, "fortification_level_type", {
        None = 0x00, "none", "None";
        Stockade = 0x01, "stockade", "Stockade";
        Fort = 0x02, "fort", "Fort";
        Fortress = 0x03, "fortress", "Fortress";
    }
}

schema_enum! {
    HasCity1bitType, u8, "has_city_1bit_type", {
        Empty = 0b0, "empty", " ";
        C = 0b1, "c", "c";
    }
}

schema_enum! {
    HasUnit1bitType, u8, "has_unit_1bit_type", {
        Empty = 0b0, "empty", " ";
        U = 0b1, "u", "u";
    }
}

schema_enum! {
    /// Hills/river code of a tile. The display strings are the glyphs the research notes use
    /// for map dumps: `^` for a hill rise, `~` for river flow, doubled when major.
    HillsRiver3bitType, u8, "hills_river_3bit_type", {
        Empty = 0b000, "empty", "  ";
        C = 0b001, "c", "^ ";
        T = 0b010, "t", "~ ";
        Tc = 0b011, "tc", "~^";
        Qq = 0b100, "qq", "??";
        Cc = 0b101, "cc", "^^";
        Tt = 0b110, "tt", "~~";
    }
}

schema_enum! {
    /// Two-bit building level. Note the jump: level two is stored as 0b11.
    Level2bitType, u8, "level_2bit_type", {
        _0 = 0b00, "_0", "_0";
        _1 = 0b01, "_1", "_1";
        _2 = 0b11, "_2", "_2";
    }
}

schema_enum! {
    /// Three-bit building level, one set bit per level: 0b000, 0b001, 0b011, 0b111.
    Level3bitType, u8, "level_3bit_type", {
        _0 = 0b000, "_0", "_0";
        _1 = 0b001, "_1", "_1";
        _2 = 0b011, "_2", "_2";
        _3 = 0b111, "_3", "_3";
    }
}

schema_enum! {
    Nation2byteType, u16, "nation_2byte_type", {
        England = 0x0000, "england", "England";
        France = 0x0001, "france", "France";
        Spain = 0x0002, "spain", "Spain";
        Netherlands = 0x0003, "netherlands", "Netherlands";
        Inca = 0x0004, "inca", "Inca";
        Aztec = 0x0005, "aztec", "Aztec";
        Arawak = 0x0006, "arawak", "Arawak";
        Iroquois = 0x0007, "iroquois", "Iroquois";
        Cherokee = 0x0008, "cherokee", "Cherokee";
        Apache = 0x0009, "apache", "Apache";
        Sioux = 0x000A, "sioux", "Sioux";
        Tupi = 0x000B, "tupi", "Tupi";
        None = 0xFFFF, "none", "None";
    }
}

schema_enum! {
    Nation4bitShortType, u8, "nation_4bit_short_type", {
        En = 0b0000, "en", "en";
        Fr = 0b0001, "fr", "fr";
        Sp = 0b0010, "sp", "sp";
        Nl = 0b0011, "nl", "nl";
        In = 0b0100, "in", "in";
        Az = 0b0101, "az", "az";
        Aw = 0b0110, "aw", "aw";
        Ir = 0b0111, "ir", "ir";
        Ch = 0b1000, "ch", "ch";
        Ap = 0b1001, "ap", "ap";
        Si = 0b1010, "si", "si";
        Tu = 0b1011, "tu", "tu";
        Empty = 0b1111, "empty", "  ";
    }
}

schema_enum! {
    Nation4bitType, u8, "nation_4bit_type", {
        England = 0b0000, "england", "England";
        France = 0b0001, "france", "France";
        Spain = 0b0010, "spain", "Spain";
        Netherlands = 0b0011, "netherlands", "Netherlands";
        Inca = 0b0100, "inca", "Inca";
        Aztec = 0b0101, "aztec", "Aztec";
        Arawak = 0b0110, "arawak", "Arawak";
        Iroquois = 0b0111, "iroquois", "Iroquois";
        Cherokee = 0b1000, "cherokee", "Cherokee";
        Apache = 0b1001, "apache", "Apache";
        Sioux = 0b1010, "sioux", "Sioux";
        Tupi = 0b1011, "tupi", "Tupi";
        None = 0b1111, "none", "None";
    }
}

schema_enum! {
    NationType, u8, "nation_type", {
        England = 0x00, "england", "England";
        France = 0x01, "france", "France";
        Spain = 0x02, "spain", "Spain";
        Netherlands = 0x03, "netherlands", "Netherlands";
        Inca = 0x04, "inca", "Inca";
        Aztec = 0x05, "aztec", "Aztec";
        Arawak = 0x06, "arawak", "Arawak";
        Iroquois = 0x07, "iroquois", "Iroquois";
        Cherokee = 0x08, "cherokee", "Cherokee";
        Apache = 0x09, "apache", "Apache";
        Sioux = 0x0A, "sioux", "Sioux";
        Tupi = 0x0B, "tupi", "Tupi";
        None = 0xFF, "none", "None";
    }
}

schema_enum! {
    /// What a colonist inside a colony works as. 0x13 shows as question marks in the game's
    /// own reports, hence the name.
    OccupationType, u8, "occupation_type", {
        Farmer = 0x00, "farmer", "Farmer";
        SugarPlanter = 0x01, "sugar_planter", "Sugar Planter";
        TobaccoPlanter = 0x02, "tobacco_planter", "Tobacco Planter";
        CottonPlanter = 0x03, "cotton_planter", "Cotton Planter";
        FurTrapper = 0x04, "fur_trapper", "Fur Trapper";
        Lumberjack = 0x05, "lumberjack", "Lumberjack";
        OreMiner = 0x06, "ore_miner", "Ore Miner";
        SilverMiner = 0x07, "silver_miner", "Silver Miner";
        Fisherman = 0x08, "fisherman", "Fisherman";
        Distiller = 0x09, "distiller", "Distiller";
        Tobacconist = 0x0A, "tobacconist", "Tobacconist";
        Weaver = 0x0B, "weaver", "Weaver";
        FurTrader = 0x0C, "fur_trader", "Fur Trader";
        Carpenter = 0x0D, "carpenter", "Carpenter";
        Blacksmith = 0x0E, "blacksmith", "Blacksmith";
        Gunsmith = 0x0F, "gunsmith", "Gunsmith";
        Preacher = 0x10, "preacher", "Preacher";
        Statesman = 0x11, "statesman", "Statesman";
        Teacher = 0x12, "teacher", "Teacher";
        Qqqqqqqqqq = 0x13, "qqqqqqqqqq", "??????????";
    }
}

schema_enum! {
    /// Unit orders. 0x04 and 0x07 never appear in surveyed saves.
    OrdersType, u8, "orders_type", {
        None = 0x00, "none", "None";
        Sentry = 0x01, "sentry", "Sentry";
        Trading = 0x02, "trading", "Trading";
        G0to = 0x03, "g0to", "GoTo";
        Fortify = 0x05, "fortify", "Fortify";
        Fortified = 0x06, "fortified", "Fortified";
        Plow = 0x08, "plow", "Plow";
        Road = 0x09, "road", "Road";
        Unknowna = 0x0A, "unknowna", "unknowna";
        Unknownb = 0x0B, "unknownb", "unknownb";
        Unknownc = 0x0C, "unknownc", "unknownc";
    }
}

schema_enum! {
    Pacific1bitType, u8, "pacific_1bit_type", {
        Empty = 0b0, "empty", " ";
        T = 0b1, "t", "~";
    }
}

schema_enum! {
    Plowed1bitType, u8, "plowed_1bit_type", {
        Empty = 0b0, "empty", " ";
        H = 0b1, "h", "#";
    }
}

schema_enum! {
    ProfessionType, u8, "profession_type", {
        ExpertFarmer = 0x00, "expert_farmer", "Expert Farmer";
        MasterSugarPlanter = 0x01, "master_sugar_planter", "Master Sugar Planter";
        MasterTobaccoPlanter = 0x02, "master_tobacco_planter", "Master Tobacco Planter";
        MasterCottonPlanter = 0x03, "master_cotton_planter", "Master Cotton Planter";
        ExpertFurTrapper = 0x04, "expert_fur_trapper", "Expert Fur Trapper";
        ExpertLumberjack = 0x05, "expert_lumberjack", "Expert Lumberjack";
        ExpertOreMiner = 0x06, "expert_ore_miner", "Expert Ore Miner";
        ExpertSilverMiner = 0x07, "expert_silver_miner", "Expert Silver Miner";
        ExpertFisherman = 0x08, "expert_fisherman", "Expert Fisherman";
        MasterDistiller = 0x09, "master_distiller", "Master Distiller";
        MasterTobacconist = 0x0A, "master_tobacconist", "Master Tobacconist";
        MasterWeaver = 0x0B, "master_weaver", "Master Weaver";
        MasterFurTrader = 0x0C, "master_fur_trader", "Master Fur Trader";
        MasterCarpenter = 0x0D, "master_carpenter", "Master Carpenter";
        MasterBlacksmith = 0x0E, "master_blacksmith", "Master Blacksmith";
        MasterGunsmith = 0x0F, "master_gunsmith", "Master Gunsmith";
        FirebrandPreacher = 0x10, "firebrand_preacher", "Firebrand Preacher";
        ElderStatesman = 0x11, "elder_statesman", "Elder Statesman";
        ExpertTeacher = 0x12, "expert_teacher", "Expert Teacher";
        AFreeColonist = 0x13, "a_free_colonist", "*(Free colonist)";
        HardyPioneer = 0x14, "hardy_pioneer", "Hardy Pioneer";
        VeteranSoldier = 0x15, "veteran_soldier", "Veteran Soldier";
        SeasonedScout = 0x16, "seasoned_scout", "Seasoned Scout";
        VeteranDragoon = 0x17, "veteran_dragoon", "Veteran Dragoon";
        JesuitMissionary = 0x18, "jesuit_missionary", "Jesuit Missionary";
        IndenturedServant = 0x19, "indentured_servant", "Indentured Servant";
        PettyCriminal = 0x1A, "petty_criminal", "Petty Criminal";
        IndianConvert = 0x1B, "indian_convert", "Indian Convert";
        FreeColonist = 0x1C, "free_colonist", "Free Colonist";
    }
}

schema_enum! {
    Purchased1bitType, u8, "purchased_1bit_type", {
        Empty = 0b0, "empty", " ";
        A = 0b1, "a", "*";
    }
}

schema_enum! {
    /// Region label of a tile. `_1` is reserved for ocean connected to the left or right
    /// map edge.
    RegionId4bitType, u8, "region_id_4bit_type", {
        _0 = 0b0000, "_0", "_0";
        _1 = 0b0001, "_1", "_1";
        _2 = 0b0010, "_2", "_2";
        _3 = 0b0011, "_3", "_3";
        _4 = 0b0100, "_4", "_4";
        _5 = 0b0101, "_5", "_5";
        _6 = 0b0110, "_6", "_6";
        _7 = 0b0111, "_7", "_7";
        _8 = 0b1000, "_8", "_8";
        _9 = 0b1001, "_9", "_9";
        _10 = 0b1010, "_10", "_10";
        _11 = 0b1011, "_11", "_11";
        _12 = 0b1100, "_12", "_12";
        _13 = 0b1101, "_13", "_13";
        _14 = 0b1110, "_14", "_14";
        _15 = 0b1111, "_15", "_15";
    }
}

schema_enum! {
    Relation3bitType, u8, "relation_3bit_type", {
        SelfVanishedNotMet = 0b000, "self_vanished_not_met", "self/vanished/not met";
        War = 0b010, "war", "War";
        PostGrantedIndependence = 0b100, "post_granted_independence", "Post Granted Independence";
        Peace = 0b110, "peace", "Peace";
    }
}

schema_enum! {
    Road1bitType, u8, "road_1bit_type", {
        Empty = 0b0, "empty", " ";
        E = 0b1, "e", "=";
    }
}

schema_enum! {
    SeasonType, u16, "season_type", {
        Spring = 0x0000, "spring", "Spring";
        Autumn = 0x0001, "autumn", "Autumn";
    }
}

schema_enum! {
    Suppress1bitType, u8, "suppress_1bit_type", {
        Empty = 0b0, "empty", " ";
        Underscore = 0b1, "_", "_";
    }
}

schema_enum! {
    TechType, u8, "tech_type", {
        SemiNomadic = 0x00, "semi_nomadic", "Semi-Nomadic";
        Agrarian = 0x01, "agrarian", "Agrarian";
        Advanced = 0x02, "advanced", "Advanced";
        Civilized = 0x03, "civilized", "Civilized";
    }
}

schema_enum! {
    /// Five-bit terrain code. The low three bits pick the ground type, bit 3 marks forest,
    /// bit 4 marks "wetland forest" (rendered identically), and the top codes are arctic,
    /// open ocean (`ttt`) and ocean with a sea lane (`tnt`).
    Terrain5bitType, u8, "terrain_5bit_type", {
        Tu = 0b00000, "tu", "tu ";
        De = 0b00001, "de", "de ";
        Pl = 0b00010, "pl", "pl ";
        Pr = 0b00011, "pr", "pr ";
        Gr = 0b00100, "gr", "gr ";
        Sa = 0b00101, "sa", "sa ";
        Mr = 0b00110, "mr", "mr ";
        Sw = 0b00111, "sw", "sw ";
        Tuf = 0b01000, "tuf", "tuf";
        Def = 0b01001, "def", "def";
        Plf = 0b01010, "plf", "plf";
        Prf = 0b01011, "prf", "prf";
        Grf = 0b01100, "grf", "grf";
        Saf = 0b01101, "saf", "saf";
        Mrf = 0b01110, "mrf", "mrf";
        Swf = 0b01111, "swf", "swf";
        Tuw = 0b10000, "tuw", "tuw";
        Dew = 0b10001, "dew", "dew";
        Plw = 0b10010, "plw", "plw";
        Prw = 0b10011, "prw", "prw";
        Grw = 0b10100, "grw", "grw";
        Saw = 0b10101, "saw", "saw";
        Mrw = 0b10110, "mrw", "mrw";
        Sww = 0b10111, "sww", "sww";
        Arc = 0b11000, "arc", "arc";
        Ttt = 0b11001, "ttt", "~~~";
        Tnt = 0b11010, "tnt", "~:~";
    }
}

schema_enum! {
    TradeRouteKindType, u8, "trade_route_type", {
        Land = 0x00, "land", "Land";
        Sea = 0x01, "sea", "Sea";
    }
}

schema_enum! {
    UnitType, u8, "unit_type", {
        Colonist = 0x00, "colonist", "Colonist";
        Soldier = 0x01, "soldier", "Soldier";
        Pioneer = 0x02, "pioneer", "Pioneer";
        Missionary = 0x03, "missionary", "Missionary";
        Dragoon = 0x04, "dragoon", "Dragoon";
        Scout = 0x05, "scout", "Scout";
        ToryRegular = 0x06, "tory_regular", "Tory Regular";
        ContinentalCavalry = 0x07, "continental_cavalry", "Continental Cavalry";
        ToryCavalry = 0x08, "tory_cavalry", "Tory Cavalry";
        ContinentalArmy = 0x09, "continental_army", "Continental Army";
        Treasure = 0x0A, "treasure", "Treasure";
        Artillery = 0x0B, "artillery", "Artillery";
        WagonTrain = 0x0C, "wagon_train", "Wagon Train";
        Caravel = 0x0D, "caravel", "Caravel";
        Merchantman = 0x0E, "merchantman", "Merchantman";
        Galleon = 0x0F, "galleon", "Galleon";
        Privateer = 0x10, "privateer", "Privateer";
        Frigate = 0x11, "frigate", "Frigate";
        ManOWar = 0x12, "man_o_war", "Man-O-War";
        Brave = 0x13, "brave", "Brave";
        ArmedBrave = 0x14, "armed_brave", "Armed Brave";
        MountedBrave = 0x15, "mounted_brave", "Mounted Brave";
        MountedWarrior = 0x16, "mounted_warrior", "Mounted Warrior";
    }
}

schema_enum! {
    VisibleToDutch1bitType, u8, "visible_to_dutch_1bit_type", {
        Empty = 0b0, "empty", " ";
        D = 0b1, "d", "d";
    }
}

schema_enum! {
    VisibleToEnglish1bitType, u8, "visible_to_english_1bit_type", {
        Empty = 0b0, "empty", " ";
        E = 0b1, "e", "e";
    }
}

schema_enum! {
    VisibleToFrench1bitType, u8, "visible_to_french_1bit_type", {
        Empty = 0b0, "empty", " ";
        F = 0b1, "f", "f";
    }
}

schema_enum! {
    VisibleToSpanish1bitType, u8, "visible_to_spanish_1bit_type", {
        Empty = 0b0, "empty", " ";
        S = 0b1, "s", "s";
    }
}

schema_enum! {
    YesNoByte, u8, "yes_no_byte", {
        No = 0x00, "no", "No";
        Yes = 0x01, "yes", "Yes";
    }
}
