use std::collections::BTreeMap;

/// Franchises and their rosters, in declared order. `/teams` serves the
/// left column as-is.
pub const TEAM_PLAYERS: [(&str, &[&str]); 10] = [
    (
        "Chennai Super Kings",
        &[
            "Ruturaj Gaikwad",
            "Devon Conway",
            "Ravindra Jadeja",
            "Mahendra Singh Dhoni",
            "Shivam Dube",
            "Moeen Ali",
            "Deepak Chahar",
            "Dwayne Bravo",
            "Tushar Deshpande",
        ],
    ),
    (
        "Mumbai Indians",
        &[
            "Ishan Kishan",
            "Rohit Sharma",
            "Suryakumar Yadav",
            "Tilak Varma",
            "Tim David",
            "Hardik Pandya",
            "Jasprit Bumrah",
            "Rahul Chahar",
            "Tymal Mills",
            "Kieron Pollard",
        ],
    ),
    (
        "Royal Challengers Bangalore",
        &[
            "Virat Kohli",
            "Faf du Plessis",
            "Glenn Maxwell",
            "Dinesh Karthik",
            "Rajat Patidar",
            "AB de Villiers",
            "Harshal Patel",
            "Yash Dayal",
            "Mohammed Siraj",
            "Josh Hazlewood",
            "Akash Deep",
        ],
    ),
    (
        "Kolkata Knight Riders",
        &[
            "Venkatesh Iyer",
            "Shreyas Iyer",
            "Nitish Rana",
            "Andre Russell",
            "Rinku Singh",
            "Phil Salt",
            "Sunil Narine",
            "Pat Cummins",
            "Varun Chakravarthy",
        ],
    ),
    (
        "Delhi Capitals",
        &[
            "David Warner",
            "Prithvi Shaw",
            "Rishabh Pant",
            "Axar Patel",
            "Lalit Yadav",
            "Rovman Powell",
            "Shardul Thakur",
            "Kuldeep Yadav",
            "Anrich Nortje",
            "Mustafizur Rahman",
            "Khaleel Ahmed",
        ],
    ),
    (
        "Punjab Kings",
        &[
            "Mayank Agarwal",
            "Shikhar Dhawan",
            "Liam Livingstone",
            "Jonny Bairstow",
            "Shahrukh Khan",
            "Sam Curran",
            "Kagiso Rabada",
            "Arshdeep Singh",
            "Rahul Chahar",
        ],
    ),
    (
        "Rajasthan Royals",
        &[
            "Jos Buttler",
            "Yashasvi Jaiswal",
            "Sanju Samson",
            "Shimron Hetmyer",
            "Riyan Parag",
            "Devdutt Padikkal",
            "Ravichandran Ashwin",
            "Trent Boult",
            "Prasidh Krishna",
            "Yuzvendra Chahal",
            "Obed McCoy",
        ],
    ),
    (
        "Sunrisers Hyderabad",
        &[
            "Kane Williamson",
            "Abhishek Sharma",
            "Travis Head",
            "Aiden Markram",
            "Nicholas Pooran",
            "Abdul Samad",
            "Washington Sundar",
            "Bhuvneshwar Kumar",
            "T Natarajan",
            "Umran Malik",
            "Marco Jansen",
        ],
    ),
    (
        "Gujarat Titans",
        &[
            "David Miller",
            "Sai Sudharsan",
            "Rahul Tewatia",
            "Wriddhiman Saha",
            "Rashid Khan",
            "Mohammed Shami",
            "Lockie Ferguson",
            "Alzarri Joseph",
        ],
    ),
    (
        "Lucknow Super Giants",
        &[
            "KL Rahul",
            "Quinton de Kock",
            "Marcus Stoinis",
            "Deepak Hooda",
            "Ayush Badoni",
            "Jason Holder",
            "Avesh Khan",
            "Dushmantha Chameera",
            "Ravi Bishnoi",
            "Mohsin Khan",
        ],
    ),
];

pub const VENUES: [&str; 10] = [
    "M. A. Chidambaram Stadium, Chennai",
    "Wankhede Stadium, Mumbai",
    "M. Chinnaswamy Stadium, Bangalore",
    "Eden Gardens, Kolkata",
    "Arun Jaitley Stadium, Delhi",
    "Punjab Cricket Association IS Bindra Stadium, Mohali",
    "Sawai Mansingh Stadium, Jaipur",
    "Rajiv Gandhi International Stadium, Hyderabad",
    "Narendra Modi Stadium, Ahmedabad",
    "Bharat Ratna Shri Atal Bihari Vajpayee Ekana Cricket Stadium, Lucknow",
];

/// The 15 batters always included in scatter-plot output.
pub const KEY_PLAYERS: [&str; 15] = [
    "Shubman Gill",
    "Faf du Plessis",
    "Ruturaj Gaikwad",
    "Virat Kohli",
    "KL Rahul",
    "Jos Buttler",
    "Sanju Samson",
    "Shikhar Dhawan",
    "Suryakumar Yadav",
    "Yashasvi Jaiswal",
    "Ishan Kishan",
    "Rohit Sharma",
    "Shivam Dube",
    "Venkatesh Iyer",
    "David Warner",
];

/// Seed scatter records (name, 1st/2nd innings average, 1st/2nd innings
/// strike rate) served when the batting table is unset.
pub const KEY_PLAYER_SCATTER: [(&str, f64, f64, f64, f64); 15] = [
    ("Shubman Gill", 45.2, 38.5, 142.8, 135.2),
    ("Faf du Plessis", 42.1, 35.8, 138.5, 132.1),
    ("Ruturaj Gaikwad", 41.8, 34.2, 136.9, 129.8),
    ("Virat Kohli", 48.5, 42.1, 140.2, 134.8),
    ("KL Rahul", 44.3, 39.7, 139.1, 133.5),
    ("Jos Buttler", 41.5, 36.8, 143.6, 138.2),
    ("Sanju Samson", 38.9, 33.5, 141.2, 135.8),
    ("Shikhar Dhawan", 39.8, 35.2, 134.5, 128.9),
    ("Suryakumar Yadav", 40.2, 36.1, 145.8, 140.2),
    ("Yashasvi Jaiswal", 43.1, 37.8, 138.9, 132.5),
    ("Ishan Kishan", 37.5, 32.8, 142.1, 136.8),
    ("Rohit Sharma", 46.2, 40.5, 137.8, 131.2),
    ("Shivam Dube", 35.8, 31.2, 144.5, 138.9),
    ("Venkatesh Iyer", 36.9, 32.1, 139.8, 133.5),
    ("David Warner", 44.8, 39.2, 141.5, 135.8),
];

/// Per-team scatter records. The team scatter endpoint is fully static.
pub const TEAM_SCATTER: [(&str, f64, f64, f64, f64); 10] = [
    ("Chennai Super Kings", 173.59, 152.45, 144.27, 134.38),
    ("Mumbai Indians", 170.25, 151.25, 140.05, 138.75),
    ("Royal Challengers Bangalore", 175.85, 146.75, 142.15, 135.25),
    ("Kolkata Knight Riders", 169.44, 149.25, 141.33, 134.38),
    ("Delhi Capitals", 166.58, 151.18, 137.81, 135.23),
    ("Punjab Kings", 168.25, 148.50, 136.75, 134.25),
    ("Rajasthan Royals", 165.25, 159.75, 139.85, 137.25),
    ("Sunrisers Hyderabad", 167.50, 154.25, 139.25, 136.75),
    ("Gujarat Titans", 164.75, 157.75, 138.50, 135.60),
    ("Lucknow Super Giants", 170.17, 150.81, 135.25, 133.75),
];

// Bowler-type strike-rate profiles. One named table per domain so the
// handlers never drift apart on the literals.

/// Placeholder profile for a player with no matchup rows.
pub const PLAYER_BOWLING_DEFAULTS: [(&str, f64); 6] = [
    ("Left arm pace", 130.0),
    ("Right arm pace", 125.0),
    ("Off spin", 115.0),
    ("Leg spin", 120.0),
    ("Slow left arm orthodox", 110.0),
    ("Left arm wrist spin", 118.0),
];

/// League-wide batter baseline, attached to every player bowling response.
pub const PLAYER_BOWLING_OVERALL: [(&str, f64); 6] = [
    ("Left arm pace", 128.5),
    ("Right arm pace", 127.2),
    ("Off spin", 118.3),
    ("Leg spin", 122.1),
    ("Slow left arm orthodox", 112.8),
    ("Left arm wrist spin", 120.4),
];

/// Placeholder profile for a team with no matchup rows.
pub const TEAM_BOWLING_DEFAULTS: [(&str, f64); 6] = [
    ("Left arm pace", 135.0),
    ("Right arm pace", 132.0),
    ("Off spin", 125.0),
    ("Leg spin", 128.0),
    ("Slow left arm orthodox", 120.0),
    ("Left arm wrist spin", 126.0),
];

/// League-wide team baseline, attached to every team bowling response.
pub const TEAM_BOWLING_OVERALL: [(&str, f64); 6] = [
    ("Left arm pace", 133.2),
    ("Right arm pace", 130.8),
    ("Off spin", 123.5),
    ("Leg spin", 126.7),
    ("Slow left arm orthodox", 118.9),
    ("Left arm wrist spin", 124.3),
];

pub fn team_names() -> Vec<String> {
    TEAM_PLAYERS.iter().map(|(team, _)| team.to_string()).collect()
}

pub fn team_players(team: &str) -> Option<&'static [&'static str]> {
    TEAM_PLAYERS
        .iter()
        .find(|(name, _)| *name == team)
        .map(|(_, players)| *players)
}

pub fn profile_map(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries
        .iter()
        .map(|(label, rate)| (label.to_string(), *rate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_teams_in_declared_order() {
        let names = team_names();
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "Chennai Super Kings");
        assert_eq!(names[9], "Lucknow Super Giants");
        // Stable across calls.
        assert_eq!(names, team_names());
    }

    #[test]
    fn rosters_resolve_for_known_teams_only() {
        for (team, _) in TEAM_PLAYERS {
            let players = team_players(team).unwrap();
            assert!(!players.is_empty());
        }
        assert!(team_players("Chennai super kings").is_none());
        assert!(team_players("Texas Rangers").is_none());
    }

    #[test]
    fn every_key_player_has_a_scatter_seed() {
        for name in KEY_PLAYERS {
            assert!(KEY_PLAYER_SCATTER.iter().any(|(n, ..)| *n == name));
        }
    }
}
