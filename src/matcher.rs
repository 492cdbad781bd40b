// Match evaluation: does the observed dominant emoji equal the round target?

use crate::codec;
use crate::round::RoundState;
use crate::score::ScoreBoard;

/// Compare the observed glyph against the round's target and record a win
/// the first time they agree.
///
/// A round that is already won ignores further matches, so at most one win
/// is recorded per round regardless of how many consecutive frames keep
/// matching. A glyph the codec cannot pin to the target — junk, empty, or
/// simply a different emoji — is a non-match, never an error.
pub fn evaluate(round: &mut RoundState, observed_glyph: &str, score: &mut ScoreBoard) -> bool {
    if round.won {
        return false;
    }

    if codec::decode(observed_glyph) == round.target.as_u32() {
        round.won = true;
        score.record_match();
        log::debug!("match: dominant emoji {} equals target", observed_glyph);
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EmojiCode;

    fn round_for(code: u32) -> RoundState {
        RoundState::new(EmojiCode::from_u32(code))
    }

    #[test]
    fn matching_glyph_wins_and_records() {
        let mut round = round_for(128515);
        let mut score = ScoreBoard::new();

        assert!(evaluate(&mut round, "😃", &mut score));
        assert!(round.won);
        assert_eq!(score.correct(), 1);
    }

    #[test]
    fn non_matching_glyph_leaves_state_unchanged() {
        let mut round = round_for(128515);
        let mut score = ScoreBoard::new();

        assert!(!evaluate(&mut round, "😱", &mut score));
        assert!(!round.won);
        assert_eq!(score.correct(), 0);
    }

    #[test]
    fn win_is_recorded_once_per_round() {
        let mut round = round_for(128515);
        let mut score = ScoreBoard::new();

        assert!(evaluate(&mut round, "😃", &mut score));
        assert!(!evaluate(&mut round, "😃", &mut score));
        assert!(!evaluate(&mut round, "😃", &mut score));
        assert_eq!(score.correct(), 1);
    }

    #[test]
    fn won_round_ignores_even_non_matches() {
        let mut round = round_for(128515);
        let mut score = ScoreBoard::new();
        round.won = true;

        assert!(!evaluate(&mut round, "😱", &mut score));
        assert!(round.won);
        assert_eq!(score.correct(), 0);
    }

    #[test]
    fn junk_glyph_is_a_non_match() {
        let mut round = round_for(128515);
        let mut score = ScoreBoard::new();

        assert!(!evaluate(&mut round, "", &mut score));
        assert!(!evaluate(&mut round, "xx", &mut score));
        assert_eq!(score.correct(), 0);
    }

    #[test]
    fn rotation_reopens_the_round() {
        let mut round = round_for(128515);
        let mut score = ScoreBoard::new();

        assert!(evaluate(&mut round, "😃", &mut score));
        round.rotate(EmojiCode::from_u32(128561));
        assert!(evaluate(&mut round, "😱", &mut score));
        assert_eq!(score.correct(), 2);
    }
}
