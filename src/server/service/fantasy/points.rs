//! Points scoring for a single match stat line.
//!
//! Points are computed once when a stat line is entered and stored with it; they are
//! never recomputed from the stat columns afterwards.

use crate::server::model::{fantasy::FantasyPosition, gameweek::StatLine};

const ASSIST_POINTS: i64 = 3;
const MOTM_POINTS: i64 = 3;
const YELLOW_CARD_POINTS: i64 = -1;
const RED_CARD_POINTS: i64 = -3;
const APPEARANCE_POINTS: i64 = 2;
const SAVES_PER_POINT: u32 = 3;

fn goal_points(position: FantasyPosition) -> i64 {
    match position {
        FantasyPosition::Att => 4,
        FantasyPosition::Mid => 5,
        FantasyPosition::Def | FantasyPosition::Gk => 6,
    }
}

fn clean_sheet_points(position: FantasyPosition) -> i64 {
    match position {
        FantasyPosition::Gk | FantasyPosition::Def => 4,
        FantasyPosition::Mid => 1,
        FantasyPosition::Att => 0,
    }
}

/// Scores one stat line.
///
/// Every entry earns the appearance bonus. The result may be negative.
pub fn calculate_points(line: &StatLine) -> i32 {
    let mut points = APPEARANCE_POINTS;

    points += i64::from(line.goals) * goal_points(line.position);
    points += i64::from(line.assists) * ASSIST_POINTS;

    if line.clean_sheet {
        points += clean_sheet_points(line.position);
    }
    if line.position == FantasyPosition::Gk {
        points += i64::from(line.saves / SAVES_PER_POINT);
    }
    if line.motm {
        points += MOTM_POINTS;
    }
    if line.yellow_card {
        points += YELLOW_CARD_POINTS;
    }
    if line.red_card {
        points += RED_CARD_POINTS;
    }

    points.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
