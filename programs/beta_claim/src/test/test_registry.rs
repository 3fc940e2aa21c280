use anchor_lang::solana_program::pubkey::Pubkey;

use crate::constants::{MAX_ADD_BATCH, MAX_PARTICIPANTS};
use crate::state::BetaClaim;

fn registry() -> BetaClaim {
    BetaClaim::default()
}

fn addrs(n: usize) -> Vec<Pubkey> {
    (0..n).map(|_| Pubkey::new_unique()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_updates_count_and_exists() {
        let mut bc = registry();
        let wallets = addrs(3);

        for (i, w) in wallets.iter().enumerate() {
            assert!(!bc.participant_exists(w));
            bc.add_participant(*w).unwrap();
            assert!(bc.participant_exists(w));
            assert_eq!(bc.participant_count(), i + 1);
        }

        // Count always equals the number of addresses that report existing
        let existing = wallets.iter().filter(|w| bc.participant_exists(w)).count();
        assert_eq!(existing, bc.participant_count());
    }

    #[test]
    fn add_rejects_zero_address() {
        let mut bc = registry();
        assert!(bc.add_participant(Pubkey::default()).is_err());
        assert_eq!(bc.participant_count(), 0);
    }

    #[test]
    fn add_rejects_duplicate() {
        let mut bc = registry();
        let w = Pubkey::new_unique();
        bc.add_participant(w).unwrap();
        assert!(bc.add_participant(w).is_err());
        assert_eq!(bc.participant_count(), 1);
    }

    #[test]
    fn add_rejects_when_full() {
        let mut bc = registry();
        for w in addrs(MAX_PARTICIPANTS) {
            bc.add_participant(w).unwrap();
        }
        assert!(bc.add_participant(Pubkey::new_unique()).is_err());
        assert_eq!(bc.participant_count(), MAX_PARTICIPANTS);
    }

    #[test]
    fn batch_add_inserts_in_order() {
        let mut bc = registry();
        let wallets = addrs(5);
        bc.add_participants(&wallets).unwrap();

        assert_eq!(bc.participant_count(), 5);
        for (i, w) in wallets.iter().enumerate() {
            assert_eq!(bc.participant_address(i).unwrap(), *w);
        }
    }

    #[test]
    fn batch_add_is_all_or_nothing() {
        let mut bc = registry();
        let seeded = Pubkey::new_unique();
        bc.add_participant(seeded).unwrap();

        // Null entry in the middle
        let mut with_null = addrs(4);
        with_null[2] = Pubkey::default();
        assert!(bc.add_participants(&with_null).is_err());
        assert_eq!(bc.participant_count(), 1);

        // Duplicate within the batch
        let mut with_dup = addrs(4);
        with_dup[3] = with_dup[0];
        assert!(bc.add_participants(&with_dup).is_err());
        assert_eq!(bc.participant_count(), 1);

        // Already registered wallet
        let mut with_existing = addrs(4);
        with_existing[1] = seeded;
        assert!(bc.add_participants(&with_existing).is_err());
        assert_eq!(bc.participant_count(), 1);
    }

    #[test]
    fn batch_add_rejects_oversized_batch() {
        let mut bc = registry();
        assert!(bc.add_participants(&addrs(MAX_ADD_BATCH + 1)).is_err());
        assert_eq!(bc.participant_count(), 0);

        bc.add_participants(&addrs(MAX_ADD_BATCH)).unwrap();
        assert_eq!(bc.participant_count(), MAX_ADD_BATCH);
    }

    #[test]
    fn batch_add_rejects_overflowing_capacity() {
        let mut bc = registry();
        for w in addrs(MAX_PARTICIPANTS - 1) {
            bc.add_participant(w).unwrap();
        }
        assert!(bc.add_participants(&addrs(2)).is_err());
        assert_eq!(bc.participant_count(), MAX_PARTICIPANTS - 1);
    }

    #[test]
    fn remove_swaps_last_into_freed_slot() {
        let mut bc = registry();
        let wallets = addrs(4);
        bc.add_participants(&wallets).unwrap();

        bc.remove_participant(&wallets[1]).unwrap();

        assert_eq!(bc.participant_count(), 3);
        assert!(!bc.participant_exists(&wallets[1]));
        // The last entry took the removed slot; the sequence stays dense
        assert_eq!(bc.participant_address(0).unwrap(), wallets[0]);
        assert_eq!(bc.participant_address(1).unwrap(), wallets[3]);
        assert_eq!(bc.participant_address(2).unwrap(), wallets[2]);
    }

    #[test]
    fn remove_missing_participant_errors() {
        let mut bc = registry();
        bc.add_participant(Pubkey::new_unique()).unwrap();
        assert!(bc.remove_participant(&Pubkey::new_unique()).is_err());
        assert_eq!(bc.participant_count(), 1);
    }

    #[test]
    fn remove_preserves_other_entries() {
        // Removing at the start, middle, and end never disturbs the
        // exists/claimed status of any other participant
        for remove_at in [0usize, 2, 4] {
            let mut bc = registry();
            let wallets = addrs(5);
            bc.add_participants(&wallets).unwrap();
            bc.mark_claimed(&wallets[1]).unwrap();
            bc.mark_claimed(&wallets[3]).unwrap();

            bc.remove_participant(&wallets[remove_at]).unwrap();

            for (i, w) in wallets.iter().enumerate() {
                if i == remove_at {
                    assert!(!bc.participant_exists(w));
                    continue;
                }
                assert!(bc.participant_exists(w));
                let expect_claimed = i == 1 || i == 3;
                assert_eq!(bc.participant_claimed(w).unwrap(), expect_claimed);
            }
        }
    }

    #[test]
    fn participant_address_out_of_range_errors() {
        let mut bc = registry();
        bc.add_participants(&addrs(2)).unwrap();
        assert!(bc.participant_address(1).is_ok());
        assert!(bc.participant_address(2).is_err());
    }

    #[test]
    fn claimed_flag_missing_participant_errors() {
        let bc = registry();
        assert!(bc.participant_claimed(&Pubkey::new_unique()).is_err());
    }

    #[test]
    fn claim_amount_truncates_and_never_overdraws() {
        let mut bc = registry();
        bc.rpl_total = 100;
        bc.add_participants(&addrs(3)).unwrap();

        assert_eq!(bc.claim_amount(), 33);
        // The remainder stays in the pool
        assert!(bc.claim_amount() * bc.participant_count() as u64 <= bc.rpl_total);
    }

    #[test]
    fn claim_amount_is_zero_for_empty_registry() {
        let mut bc = registry();
        bc.rpl_total = 100;
        assert_eq!(bc.claim_amount(), 0);
    }

    #[test]
    fn claim_amount_tracks_registry_size() {
        // The share is computed from the current registry size, so a
        // removal before the window opens changes the per-head amount
        let mut bc = registry();
        bc.rpl_total = 100;
        let wallets = addrs(4);
        bc.add_participants(&wallets).unwrap();
        assert_eq!(bc.claim_amount(), 25);

        bc.remove_participant(&wallets[0]).unwrap();
        assert_eq!(bc.claim_amount(), 33);
    }

    #[test]
    fn mark_claimed_is_one_way_and_once_only() {
        let mut bc = registry();
        let w = Pubkey::new_unique();
        bc.add_participant(w).unwrap();

        assert!(!bc.participant_claimed(&w).unwrap());
        bc.mark_claimed(&w).unwrap();
        assert!(bc.participant_claimed(&w).unwrap());

        // Every attempt after the first fails and the flag stays set
        for _ in 0..3 {
            assert!(bc.mark_claimed(&w).is_err());
            assert!(bc.participant_claimed(&w).unwrap());
        }
    }

    #[test]
    fn mark_claimed_rejects_unregistered_wallet() {
        let mut bc = registry();
        bc.add_participant(Pubkey::new_unique()).unwrap();
        assert!(bc.mark_claimed(&Pubkey::new_unique()).is_err());
    }

    #[test]
    fn two_participant_split() {
        let mut bc = registry();
        bc.rpl_total = 100;
        let p1 = Pubkey::new_unique();
        let p2 = Pubkey::new_unique();
        bc.add_participants(&[p1, p2]).unwrap();

        assert_eq!(bc.claim_amount(), 50);

        bc.mark_claimed(&p1).unwrap();
        assert!(bc.participant_claimed(&p1).unwrap());
        assert!(!bc.participant_claimed(&p2).unwrap());
        // The share does not change after a claim; only registry size
        // and the configured total drive it
        assert_eq!(bc.claim_amount(), 50);

        assert!(bc.mark_claimed(&p1).is_err());
        bc.mark_claimed(&p2).unwrap();
    }
}
