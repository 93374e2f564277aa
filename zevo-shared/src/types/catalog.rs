use serde::{Deserialize, Serialize};

/// Sports supported across the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sport {
    Football,
    Cricket,
    Badminton,
    Volleyball,
    Tennis,
    Basketball,
    Pickleball,
    Futsal,
    #[serde(rename = "Table Tennis")]
    TableTennis,
    Padel,
    Hockey,
    Skating,
}

impl Sport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Football => "Football",
            Self::Cricket => "Cricket",
            Self::Badminton => "Badminton",
            Self::Volleyball => "Volleyball",
            Self::Tennis => "Tennis",
            Self::Basketball => "Basketball",
            Self::Pickleball => "Pickleball",
            Self::Futsal => "Futsal",
            Self::TableTennis => "Table Tennis",
            Self::Padel => "Padel",
            Self::Hockey => "Hockey",
            Self::Skating => "Skating",
        }
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bookable arena. The catalog is static: arenas are onboarded by the
/// ZEVO team, not created through the API.
#[derive(Debug, Clone, Serialize)]
pub struct Arena {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    pub sport: Sport,
    pub price: &'static str,
    pub lat: f64,
    pub lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,
}

pub const ARENAS: &[Arena] = &[
    Arena { id: "ground-zero", name: "Ground Zero Turf", location: "Sector 65, Kharar", sport: Sport::Football, price: "Rs. 1400/hr", lat: 30.7488, lng: 76.6516, format: None },
    Arena { id: "mj-sports", name: "M J Sports Arena", location: "Sunny Enclave, Kharar", sport: Sport::Cricket, price: "Rs. 1200/hr", lat: 30.7469, lng: 76.6641, format: Some("Box Cricket") },
    Arena { id: "tiki-taka", name: "Tiki Taka Football Ground", location: "Landran Road, Kharar", sport: Sport::Futsal, price: "Rs. 1000/hr", lat: 30.7256, lng: 76.6874, format: Some("5v5 Football") },
    Arena { id: "spada", name: "Spada Arenas", location: "Shivjot Enclave", sport: Sport::Badminton, price: "Rs. 800/hr", lat: 30.7529, lng: 76.6408, format: None },
    Arena { id: "smashpoint", name: "SmashPoint Courts", location: "Sector 70, Mohali", sport: Sport::Tennis, price: "Rs. 1100/hr", lat: 30.7047, lng: 76.7279, format: None },
    Arena { id: "hoops-hub", name: "Hoops Hub Arena", location: "Phase 11, Mohali", sport: Sport::Basketball, price: "Rs. 900/hr", lat: 30.6716, lng: 76.7221, format: None },
    Arena { id: "pickle-zone", name: "Pickle Zone", location: "Aerocity, Mohali", sport: Sport::Pickleball, price: "Rs. 950/hr", lat: 30.6744, lng: 76.7822, format: None },
    Arena { id: "volley-club", name: "Volley Club", location: "Sector 48, Chandigarh", sport: Sport::Volleyball, price: "Rs. 850/hr", lat: 30.7017, lng: 76.7677, format: None },
    Arena { id: "city-football-arena", name: "City Football Arena", location: "Sector 67, Mohali", sport: Sport::Football, price: "Rs. 1350/hr", lat: 30.7083, lng: 76.6902, format: None },
    Arena { id: "pro-box-cricket", name: "Pro Box Cricket", location: "Phase 7, Mohali", sport: Sport::Cricket, price: "Rs. 1250/hr", lat: 30.7075, lng: 76.7181, format: Some("Box Cricket") },
    Arena { id: "netplay-badminton", name: "NetPlay Badminton Courts", location: "Sector 79, Mohali", sport: Sport::Badminton, price: "Rs. 750/hr", lat: 30.6629, lng: 76.7324, format: None },
    Arena { id: "ace-badminton-hub", name: "Ace Badminton Hub", location: "Zirakpur Patiala Road", sport: Sport::Badminton, price: "Rs. 820/hr", lat: 30.6455, lng: 76.8172, format: None },
    Arena { id: "pickle-pro-arena", name: "Pickle Pro Arena", location: "Sector 68, Mohali", sport: Sport::Pickleball, price: "Rs. 980/hr", lat: 30.7029, lng: 76.7017, format: None },
    Arena { id: "north-pickle-courts", name: "North Pickle Courts", location: "Sector 26, Chandigarh", sport: Sport::Pickleball, price: "Rs. 1020/hr", lat: 30.7454, lng: 76.8017, format: None },
    Arena { id: "table-smash-studio", name: "Table Smash Studio", location: "Sector 35, Chandigarh", sport: Sport::TableTennis, price: "Rs. 650/hr", lat: 30.7308, lng: 76.7691, format: None },
    Arena { id: "spin-serve-tt", name: "Spin & Serve TT Club", location: "Kharar-Landran Road", sport: Sport::TableTennis, price: "Rs. 600/hr", lat: 30.7192, lng: 76.6763, format: None },
    Arena { id: "padel-bay", name: "Padel Bay Courts", location: "Sector 34A, Chandigarh", sport: Sport::Padel, price: "Rs. 1500/hr", lat: 30.7234, lng: 76.7638, format: None },
    Arena { id: "hockey-practice-ground", name: "Hockey Practice Ground", location: "Sector 42 Sports Complex", sport: Sport::Hockey, price: "Rs. 1300/hr", lat: 30.7133, lng: 76.7684, format: None },
    Arena { id: "urban-skate-arena", name: "Urban Skate Arena", location: "Naya Gaon, Chandigarh", sport: Sport::Skating, price: "Rs. 500/hr", lat: 30.7732, lng: 76.7797, format: None },
    Arena { id: "futsal-zone-plus", name: "Futsal Zone Plus", location: "Sector 74, Mohali", sport: Sport::Futsal, price: "Rs. 1150/hr", lat: 30.6772, lng: 76.7265, format: None },
    Arena { id: "indoor-volley-pro", name: "Indoor Volley Pro", location: "Industrial Area Phase 2", sport: Sport::Volleyball, price: "Rs. 900/hr", lat: 30.7003, lng: 76.7932, format: None },
    Arena { id: "baseline-tennis-club", name: "Baseline Tennis Club", location: "Sector 21, Panchkula", sport: Sport::Tennis, price: "Rs. 1150/hr", lat: 30.6938, lng: 76.8472, format: None },
    Arena { id: "downtown-hoops", name: "Downtown Hoops Court", location: "Sector 44, Chandigarh", sport: Sport::Basketball, price: "Rs. 920/hr", lat: 30.7054, lng: 76.7614, format: None },
];

pub fn find_arena(id: &str) -> Option<&'static Arena> {
    ARENAS.iter().find(|arena| arena.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_arena_by_id() {
        let arena = find_arena("ground-zero").unwrap();
        assert_eq!(arena.name, "Ground Zero Turf");
        assert_eq!(arena.sport, Sport::Football);
    }

    #[test]
    fn unknown_arena_is_none() {
        assert!(find_arena("no-such-arena").is_none());
    }

    #[test]
    fn multi_word_sport_serializes_with_space() {
        assert_eq!(
            serde_json::to_string(&Sport::TableTennis).unwrap(),
            "\"Table Tennis\""
        );
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<_> = ARENAS.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ARENAS.len());
    }
}
