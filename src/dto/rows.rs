//! Table rows with money columns already formatted.

use serde::Serialize;

use crate::domain::club::Club;
use crate::domain::coach::Coach;
use crate::domain::player::Player;
use crate::formatting::{format_budget, format_millions, format_salary};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlayerRow {
    pub id: i32,
    pub name: String,
    pub position: String,
    pub club: Option<String>,
    pub market_value: String,
    pub salary: String,
}

impl From<&Player> for PlayerRow {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id.get(),
            name: player.name.clone(),
            position: player.position.clone(),
            club: player.club.clone(),
            market_value: format_millions(player.market_value.map(|v| v as f64)),
            salary: format_salary(player.salary),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CoachRow {
    pub id: i32,
    pub name: String,
    pub club: Option<String>,
    pub nationality: Option<String>,
    pub salary: String,
}

impl From<&Coach> for CoachRow {
    fn from(coach: &Coach) -> Self {
        Self {
            id: coach.id.get(),
            name: coach.name.clone(),
            club: coach.club.clone(),
            nationality: coach.nationality.clone(),
            salary: format_salary(coach.salary),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClubRow {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub founded: Option<i32>,
    pub budget: String,
}

impl From<&Club> for ClubRow {
    fn from(club: &Club) -> Self {
        Self {
            id: club.id.get(),
            name: club.name.clone(),
            city: club.city.clone(),
            founded: club.founded,
            budget: format_budget(club.budget),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{ClubId, CoachId, PlayerId};

    #[test]
    fn player_row_formats_money() {
        let player = Player {
            id: PlayerId::new(9).expect("valid id"),
            name: "Robert Lewandowski".to_string(),
            position: "Delantero".to_string(),
            club: Some("FC Barcelona".to_string()),
            nationality: Some("Polonia".to_string()),
            market_value: Some(2_500_000),
            salary: Some(0),
        };

        let row = PlayerRow::from(&player);

        assert_eq!(row.market_value, "2.5M €");
        assert_eq!(row.salary, "0 €");
    }

    #[test]
    fn missing_amounts_follow_each_column_policy() {
        let coach = Coach {
            id: CoachId::new(1).expect("valid id"),
            name: "Carlo Ancelotti".to_string(),
            club: None,
            nationality: None,
            salary: None,
        };
        let club = Club {
            id: ClubId::new(1).expect("valid id"),
            name: "Valencia CF".to_string(),
            city: "Valencia".to_string(),
            founded: Some(1919),
            budget: Some(120_000_000),
        };

        assert_eq!(CoachRow::from(&coach).salary, "Sin valor");
        assert_eq!(ClubRow::from(&club).budget, "120.000.000 €");
    }
}
