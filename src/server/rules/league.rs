//! League vocabulary: the clubs, the division each club plays in, and the divisions.
//!
//! The vocabulary belongs to the deployment and is read from configuration. With no
//! clubs configured, team names are free text and no division is derived from them.

use crate::server::error::config::ConfigError;

/// Pseudo-team for players without a club. Has no division.
pub const FREE_AGENT: &str = "Free Agent";

/// Divisions used when none are configured.
pub const DEFAULT_DIVISIONS: &[&str] = &["A", "B", "C"];

/// A club and the division it plays in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Club {
    pub name: String,
    pub division: String,
}

/// Team and division vocabulary used to validate roster writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct League {
    clubs: Vec<Club>,
    divisions: Vec<String>,
}

impl Default for League {
    fn default() -> Self {
        Self {
            clubs: Vec::new(),
            divisions: DEFAULT_DIVISIONS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl League {
    /// Parses the configured vocabulary.
    ///
    /// # Arguments
    /// - `teams` - `LEAGUE_TEAMS` value, comma-separated `Club Name:Division` pairs
    /// - `divisions` - `LEAGUE_DIVISIONS` value, comma-separated division names
    ///
    /// # Returns
    /// - `Ok(League)` - Parsed vocabulary; unset values fall back to the defaults
    /// - `Err(ConfigError::InvalidEnvVar)` - A pair is malformed or names an unknown
    ///   division
    pub fn parse(teams: Option<&str>, divisions: Option<&str>) -> Result<Self, ConfigError> {
        let mut league = Self::default();

        if let Some(divisions) = divisions {
            league.divisions = split_list(divisions).map(str::to_string).collect();
        }

        let Some(teams) = teams else {
            return Ok(league);
        };

        for pair in split_list(teams) {
            let invalid = |reason: String| ConfigError::InvalidEnvVar {
                name: "LEAGUE_TEAMS".to_string(),
                reason,
            };

            let (name, division) = pair
                .rsplit_once(':')
                .map(|(name, division)| (name.trim(), division.trim()))
                .filter(|(name, division)| !name.is_empty() && !division.is_empty())
                .ok_or_else(|| invalid(format!("expected 'Club:Division', got '{}'", pair)))?;

            let division = league
                .canonical_division(division)
                .ok_or_else(|| invalid(format!("unknown division '{}' for {}", division, name)))?;

            league.clubs.push(Club {
                name: name.to_string(),
                division,
            });
        }

        Ok(league)
    }

    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    pub fn divisions(&self) -> &[String] {
        &self.divisions
    }

    /// Canonical spelling of a team name, matching case-insensitively.
    ///
    /// `Free Agent` is always accepted. Without configured clubs any non-blank name is
    /// accepted as written.
    pub fn canonical_team(&self, input: &str) -> Option<String> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        if input.eq_ignore_ascii_case(FREE_AGENT) {
            return Some(FREE_AGENT.to_string());
        }
        if self.clubs.is_empty() {
            return Some(input.to_string());
        }

        self.find_club(input).map(|club| club.name.clone())
    }

    /// Canonical spelling of a division, matching case-insensitively.
    pub fn canonical_division(&self, input: &str) -> Option<String> {
        let input = input.trim();
        self.divisions
            .iter()
            .find(|division| division.eq_ignore_ascii_case(input))
            .cloned()
    }

    /// Division a team plays in; `None` for free agents and unconfigured teams.
    pub fn division_for_team(&self, team: &str) -> Option<&str> {
        self.find_club(team.trim())
            .map(|club| club.division.as_str())
    }

    fn find_club(&self, name: &str) -> Option<&Club> {
        self.clubs
            .iter()
            .find(|club| club.name.eq_ignore_ascii_case(name))
    }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|item| !item.is_empty())
}

/// Two clubs per division for service and controller tests.
#[cfg(test)]
pub(crate) fn test_league() -> League {
    League::parse(
        Some("Ashford United:A, Bramley City:A, Eastwick Town:B, Fenwick Albion:B, Glenholm FC:C, Harrow Vale:C"),
        None,
    )
    .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_division_from_configured_team() {
        let league = test_league();

        assert_eq!(league.division_for_team("Ashford United"), Some("A"));
        assert_eq!(league.division_for_team("harrow vale"), Some("C"));
        assert_eq!(league.division_for_team(FREE_AGENT), None);
        assert_eq!(league.division_for_team("Nowhere FC"), None);
    }

    #[test]
    fn canonicalizes_configured_names() {
        let league = test_league();

        assert_eq!(league.canonical_team("  glenholm fc ").as_deref(), Some("Glenholm FC"));
        assert_eq!(league.canonical_team("free agent").as_deref(), Some(FREE_AGENT));
        assert_eq!(league.canonical_team("Nowhere FC"), None);
        assert_eq!(league.canonical_division("c").as_deref(), Some("C"));
        assert_eq!(league.canonical_division("D"), None);
    }

    #[test]
    fn unconfigured_league_accepts_any_team_and_default_divisions() {
        let league = League::default();

        assert_eq!(league.canonical_team(" Real Club ").as_deref(), Some("Real Club"));
        assert_eq!(league.canonical_team("   "), None);
        assert_eq!(league.division_for_team("Real Club"), None);
        for division in ["A", "b", "C"] {
            assert!(league.canonical_division(division).is_some());
        }
    }

    #[test]
    fn parses_custom_divisions() {
        let league = League::parse(Some("North Stars:Premier"), Some("Premier, Championship")).unwrap();

        assert_eq!(league.divisions(), ["Premier", "Championship"]);
        assert_eq!(league.division_for_team("north stars"), Some("Premier"));
        assert_eq!(league.canonical_division("A"), None);
    }

    #[test]
    fn rejects_malformed_team_pairs() {
        for teams in ["Ashford United", "Ashford United:", "Ashford United:Z"] {
            assert!(matches!(
                League::parse(Some(teams), None),
                Err(ConfigError::InvalidEnvVar { ref name, .. }) if name == "LEAGUE_TEAMS"
            ));
        }
    }
}
