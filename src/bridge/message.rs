//! Inbox sequence numbers and L2 transaction hash prediction.
//!
//! Every message the Inbox accepts gets a sequence number. The L2 hashes of
//! the resulting retryable ticket are a pure function of the L2 chain id and
//! that number, so they can be waited on before they exist.

use alloy::primitives::{keccak256, Address, Log, B256, U256};
use alloy::sol_types::SolEvent;
use serde::{Deserialize, Serialize};

use crate::bridge::contracts::IInbox;

/// Sequence numbers of the Inbox messages in a set of L1 receipt logs.
///
/// With `inbox` set only logs emitted by that contract count; without it
/// any emitter of the Inbox events is accepted.
pub fn inbox_sequence_numbers(inbox: Option<Address>, logs: &[Log]) -> Vec<U256> {
    logs.iter()
        .filter(|log| inbox.map_or(true, |inbox| log.address == inbox))
        .filter_map(|log| {
            let topic0 = log.topics().first()?;
            if *topic0 == IInbox::InboxMessageDelivered::SIGNATURE_HASH {
                IInbox::InboxMessageDelivered::decode_log_data(&log.data)
                    .ok()
                    .map(|event| event.messageNum)
            } else if *topic0 == IInbox::InboxMessageDeliveredFromOrigin::SIGNATURE_HASH {
                IInbox::InboxMessageDeliveredFromOrigin::decode_log_data(&log.data)
                    .ok()
                    .map(|event| event.messageNum)
            } else {
                None
            }
        })
        .collect()
}

/// Hash of the L2 transaction that creates the ticket for message `seq_num`.
pub fn retryable_creation_hash(l2_chain_id: u64, seq_num: U256) -> B256 {
    let flipped = seq_num | (U256::from(1u64) << 255usize);
    let mut preimage = [0u8; 64];
    preimage[..32].copy_from_slice(&U256::from(l2_chain_id).to_be_bytes::<32>());
    preimage[32..].copy_from_slice(&flipped.to_be_bytes::<32>());
    keccak256(preimage)
}

/// Hash of the redeem transaction executing the ticket's L2 call.
pub fn retryable_redeem_hash(creation_hash: B256) -> B256 {
    derived_hash(creation_hash, 0)
}

/// Hash of the automatic redeem attempt scheduled at ticket creation.
pub fn auto_redeem_hash(creation_hash: B256) -> B256 {
    derived_hash(creation_hash, 1)
}

fn derived_hash(creation_hash: B256, index: u64) -> B256 {
    let mut preimage = [0u8; 64];
    preimage[..32].copy_from_slice(creation_hash.as_slice());
    preimage[32..].copy_from_slice(&U256::from(index).to_be_bytes::<32>());
    keccak256(preimage)
}

/// All L2 hashes derived from one Inbox message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct L2MessageHashes {
    pub sequence_number: U256,
    pub creation: B256,
    pub redeem: B256,
    pub auto_redeem: B256,
}

impl L2MessageHashes {
    pub fn derive(l2_chain_id: u64, sequence_number: U256) -> Self {
        let creation = retryable_creation_hash(l2_chain_id, sequence_number);
        Self {
            sequence_number,
            creation,
            redeem: retryable_redeem_hash(creation),
            auto_redeem: auto_redeem_hash(creation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{b256, Bytes};

    const INBOX: Address = Address::repeat_byte(0x11);

    fn delivered(emitter: Address, seq: u64) -> Log {
        let event = IInbox::InboxMessageDelivered {
            messageNum: U256::from(seq),
            data: Bytes::from_static(b"payload"),
        };
        Log {
            address: emitter,
            data: event.encode_log_data(),
        }
    }

    #[test]
    fn test_creation_hash_vectors() {
        assert_eq!(
            retryable_creation_hash(421611, U256::from(1)),
            b256!("1f18cd93c236e7147ffce02c69afd1ebd3b7431681934af2bdc6b5e50f2abc0f")
        );
        assert_eq!(
            retryable_creation_hash(42161, U256::from(12345)),
            b256!("829a2b89c89b0f4ff9bd3e40ea0eb614314a67673378b49ef5dc43d2fbd32abf")
        );
    }

    #[test]
    fn test_derived_hash_vectors() {
        let hashes = L2MessageHashes::derive(421611, U256::from(1));
        assert_eq!(
            hashes.redeem,
            b256!("283e4602fde377eed5595da8457796c6857c77737e86d1a0300dc2b9f52df504")
        );
        assert_eq!(
            hashes.auto_redeem,
            b256!("7395ec0ad2b484b4494956a19ba1545b0ccb0c8349118b7e67a3f3e338fd5518")
        );
    }

    #[test]
    fn test_sequence_numbers_in_order() {
        let logs = vec![delivered(INBOX, 7), delivered(INBOX, 8)];
        assert_eq!(
            inbox_sequence_numbers(Some(INBOX), &logs),
            vec![U256::from(7), U256::from(8)]
        );
    }

    #[test]
    fn test_sequence_numbers_filter_emitter() {
        let impostor = Address::repeat_byte(0x22);
        let logs = vec![delivered(impostor, 1), delivered(INBOX, 2)];

        assert_eq!(inbox_sequence_numbers(Some(INBOX), &logs), vec![U256::from(2)]);
        assert_eq!(inbox_sequence_numbers(None, &logs).len(), 2);
    }

    #[test]
    fn test_from_origin_event() {
        let event = IInbox::InboxMessageDeliveredFromOrigin {
            messageNum: U256::from(99),
        };
        let logs = vec![Log {
            address: INBOX,
            data: event.encode_log_data(),
        }];
        assert_eq!(inbox_sequence_numbers(Some(INBOX), &logs), vec![U256::from(99)]);
    }

    #[test]
    fn test_unrelated_logs_yield_nothing() {
        let transfer = Log::new_unchecked(
            INBOX,
            vec![B256::repeat_byte(0xdd)],
            Bytes::from_static(&[0u8; 32]),
        );
        let anonymous = Log::new_unchecked(INBOX, Vec::new(), Bytes::new());
        assert!(inbox_sequence_numbers(Some(INBOX), &[transfer, anonymous]).is_empty());
    }
}
