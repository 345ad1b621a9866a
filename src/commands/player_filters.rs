//! Player filtering logic for the profiles command.

use crate::stats::{PlayerProfile, PlayerRole};

/// True if the player's name contains any of the given fragments (case-insensitive)
pub fn matches_name_filter(profile: &PlayerProfile, names: &[String]) -> bool {
    if names.is_empty() {
        return true;
    }
    let player_name = profile.player.to_lowercase();
    names
        .iter()
        .any(|name| player_name.contains(&name.to_lowercase()))
}

/// Apply the optional name and role filters, keeping the incoming order
pub fn filter_profiles(
    profiles: Vec<PlayerProfile>,
    player_names: Option<&[String]>,
    role: Option<PlayerRole>,
) -> Vec<PlayerProfile> {
    profiles
        .into_iter()
        .filter(|profile| {
            if let Some(names) = player_names {
                if !matches_name_filter(profile, names) {
                    return false;
                }
            }

            if let Some(wanted) = role {
                if profile.role != wanted {
                    return false;
                }
            }

            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_profile(name: &str, runs: u64, wickets: u64) -> PlayerProfile {
        let role = PlayerRole::classify(runs, wickets);
        PlayerProfile {
            player: name.to_string(),
            teams: vec!["Rajasthan Royals".to_string()],
            matches_played: 1,
            total_runs: runs,
            total_balls: runs.max(1),
            total_wickets: wickets,
            strike_rate: 100.0,
            catches: 0,
            runouts: 0,
            role,
            color: role.color().to_string(),
        }
    }

    fn sample() -> Vec<PlayerProfile> {
        vec![
            create_test_profile("SV Samson", 450, 0),
            create_test_profile("YS Chahal", 20, 21),
            create_test_profile("R Ashwin", 310, 12),
            create_test_profile("Sandeep Sharma", 5, 3),
        ]
    }

    #[test]
    fn test_matches_name_filter_case_insensitive() {
        let profile = create_test_profile("SV Samson", 0, 0);
        assert!(matches_name_filter(&profile, &["samson".to_string()]));
        assert!(matches_name_filter(&profile, &["xyz".to_string(), "SV".to_string()]));
        assert!(!matches_name_filter(&profile, &["Chahal".to_string()]));
    }

    #[test]
    fn test_empty_name_list_matches_everyone() {
        let profile = create_test_profile("SV Samson", 0, 0);
        assert!(matches_name_filter(&profile, &[]));
    }

    #[test]
    fn test_filter_by_role() {
        let filtered = filter_profiles(sample(), None, Some(PlayerRole::Bowler));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].player, "YS Chahal");

        let filtered = filter_profiles(sample(), None, Some(PlayerRole::AllRounder));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].player, "R Ashwin");
    }

    #[test]
    fn test_filter_by_name_and_role() {
        let names = vec!["s".to_string()];
        let filtered = filter_profiles(sample(), Some(names.as_slice()), Some(PlayerRole::Other));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].player, "Sandeep Sharma");
    }

    #[test]
    fn test_no_filters_keeps_order() {
        let filtered = filter_profiles(sample(), None, None);
        let names: Vec<&str> = filtered.iter().map(|p| p.player.as_str()).collect();
        assert_eq!(
            names,
            vec!["SV Samson", "YS Chahal", "R Ashwin", "Sandeep Sharma"]
        );
    }
}
