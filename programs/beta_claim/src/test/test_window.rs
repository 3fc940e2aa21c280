use crate::constants::CLAIM_PERIOD;
use crate::state::BetaClaim;

const START: i64 = 1_700_000_000;

fn configured() -> BetaClaim {
    let mut bc = BetaClaim::default();
    bc.set_claim_start(START, START - 1_000).unwrap();
    bc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_is_derived_from_fixed_period() {
        let bc = configured();
        assert_eq!(bc.claim_start, START);
        assert_eq!(bc.claim_end, START + CLAIM_PERIOD);
    }

    #[test]
    fn unconfigured_window_is_pending_and_never_open() {
        let bc = BetaClaim::default();
        assert!(!bc.start_is_set());
        assert!(bc.is_pending(0));
        assert!(bc.is_pending(i64::MAX));
        assert!(!bc.is_open(0));
        assert!(!bc.is_open(i64::MAX));
    }

    #[test]
    fn window_boundaries() {
        let bc = configured();
        let end = bc.claim_end;

        // Closed-open interval [start, end)
        assert!(!bc.is_open(START - 1));
        assert!(bc.is_open(START));
        assert!(bc.is_open(end - 1));
        assert!(!bc.is_open(end));
        assert!(!bc.is_open(end + 1));
    }

    #[test]
    fn pending_ends_exactly_at_start() {
        let bc = configured();
        assert!(bc.is_pending(START - 1));
        assert!(!bc.is_pending(START));
        assert!(!bc.is_pending(START + 1));
    }

    #[test]
    fn closed_round_is_never_open() {
        let mut bc = configured();
        bc.closed = true;
        assert!(!bc.is_open(START));
        assert!(!bc.is_open(bc.claim_end - 1));
    }

    #[test]
    fn start_can_be_moved_while_pending() {
        let mut bc = configured();
        let now = START - 500;

        bc.set_claim_start(START + 10_000, now).unwrap();
        assert_eq!(bc.claim_start, START + 10_000);
        assert_eq!(bc.claim_end, START + 10_000 + CLAIM_PERIOD);

        // Moving it back while still pending is also allowed
        bc.set_claim_start(START, now).unwrap();
        assert_eq!(bc.claim_end, START + CLAIM_PERIOD);
    }

    #[test]
    fn start_is_immutable_once_passed() {
        let mut bc = configured();

        // At the boundary instant the window has opened
        assert!(bc.set_claim_start(START + 5_000, START).is_err());
        assert!(bc.set_claim_start(START + 5_000, START + 1).is_err());
        assert_eq!(bc.claim_start, START);
        assert_eq!(bc.claim_end, START + CLAIM_PERIOD);
    }

    #[test]
    fn start_rejects_unset_sentinel() {
        let mut bc = BetaClaim::default();
        assert!(bc.set_claim_start(0, 10).is_err());
        assert!(bc.set_claim_start(-5, 10).is_err());
        assert!(!bc.start_is_set());
    }

    #[test]
    fn start_overflow_is_rejected() {
        let mut bc = BetaClaim::default();
        assert!(bc.set_claim_start(i64::MAX - 1, 10).is_err());
    }
}
