multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal — a request to move the shared counter by one
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    /// Zero-based, assigned from `nextProposalId`
    pub id: u64,
    pub creator: ManagedAddress<M>,
    /// true adds 1 to the counter on finalization, false subtracts 1
    pub is_add_proposal: bool,
    /// Affirmative votes only
    pub vote_count: u64,
    pub minimum_votes: u64,
    /// Set once, when `vote_count` reaches `minimum_votes`
    pub has_ended: bool,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn new(
        id: u64,
        creator: ManagedAddress<M>,
        is_add_proposal: bool,
        minimum_votes: u64,
    ) -> Self {
        Proposal {
            id,
            creator,
            is_add_proposal,
            vote_count: 0,
            minimum_votes,
            has_ended: false,
        }
    }

    pub fn threshold_reached(&self) -> bool {
        self.vote_count >= self.minimum_votes
    }

    /// Signed effect applied to the counter when this proposal finalizes.
    pub fn counter_delta(&self) -> i64 {
        if self.is_add_proposal {
            1
        } else {
            -1
        }
    }
}
