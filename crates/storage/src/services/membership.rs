/// Number of team fields exactly equal to `team_name`.
///
/// Mirrors the `member_count` query over an in-memory roster: matching is
/// case-sensitive and users without a team never count.
pub fn count_members<'a, I>(team_name: &str, user_teams: I) -> usize
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    user_teams
        .into_iter()
        .filter(|team| *team == Some(team_name))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_exact_matches() {
        let teams = [
            Some("Team Marvel"),
            Some("Team DC"),
            Some("Team Marvel"),
            None,
            Some("team marvel"),
        ];
        assert_eq!(count_members("Team Marvel", teams), 2);
        assert_eq!(count_members("Team DC", teams), 1);
    }

    #[test]
    fn test_team_without_members() {
        assert_eq!(count_members("Team X", [Some("Team A"), None]), 0);
        assert_eq!(count_members("Team X", std::iter::empty()), 0);
    }
}
