use crate::model::profile::Avatar;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub rank: usize,
    pub name: String,
    pub points: u64,
    pub avatar: Avatar,
    pub title: String,
    pub is_player: bool,
}

const RIVALS: [(&str, u64, Avatar, &str); 10] = [
    ("Emma Green", 2847, Avatar::Sapling, "Eco Master"),
    ("Alex Rivers", 2634, Avatar::Droplet, "Planet Protector"),
    ("Maya Forest", 2521, Avatar::Recycle, "Nature Guardian"),
    ("Sam Ocean", 2398, Avatar::Sapling, "Earth Defender"),
    ("Luna Sky", 2156, Avatar::Droplet, "Green Champion"),
    ("Rio Earth", 1987, Avatar::Recycle, "Eco Warrior"),
    ("Sage Wind", 1834, Avatar::Sapling, "Climate Hero"),
    ("Coral Reef", 1723, Avatar::Droplet, "Sustainability Star"),
    ("Forest Pine", 1654, Avatar::Recycle, "Green Guardian"),
    ("River Stone", 1587, Avatar::Sapling, "Eco Explorer"),
];

/// Title shown next to the player, by total points.
pub fn player_title(points: u64) -> &'static str {
    match points {
        0..=249 => "Seed Planter",
        250..=999 => "Nature Lover",
        1000..=1999 => "Eco Explorer",
        2000..=2999 => "Green Champion",
        _ => "Eco Master",
    }
}

/// Rivals plus the player, highest points first. Ties go to the rival.
pub fn standings(player_name: &str, player_points: u64, player_avatar: Avatar) -> Vec<Standing> {
    let mut rows: Vec<Standing> = RIVALS
        .iter()
        .map(|(name, points, avatar, title)| Standing {
            rank: 0,
            name: name.to_string(),
            points: *points,
            avatar: *avatar,
            title: title.to_string(),
            is_player: false,
        })
        .collect();

    rows.push(Standing {
        rank: 0,
        name: player_name.to_string(),
        points: player_points,
        avatar: player_avatar,
        title: player_title(player_points).to_string(),
        is_player: true,
    });

    // Stable sort keeps rivals ahead of the player on equal points.
    rows.sort_by(|a, b| b.points.cmp(&a.points));
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_ranks_last() {
        let rows = standings("Kid", 0, Avatar::Droplet);
        let me = rows.iter().find(|r| r.is_player).unwrap();
        assert_eq!(me.rank, RIVALS.len() + 1);
        assert_eq!(me.title, "Seed Planter");
    }

    #[test]
    fn top_score_takes_first_place() {
        let rows = standings("Kid", 5000, Avatar::Sapling);
        assert!(rows[0].is_player);
        assert_eq!(rows[0].rank, 1);
    }

    #[test]
    fn tie_goes_to_rival() {
        let rows = standings("Kid", 2847, Avatar::Sapling);
        assert_eq!(rows[0].name, "Emma Green");
        assert!(rows[1].is_player);
    }
}
