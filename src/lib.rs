#![no_std]

multiversx_sc::imports!();

pub mod ballot_proxy;
pub mod errors;
pub mod ownership_registry_proxy;
pub mod types;

use errors::{
    ERR_ALREADY_VOTED, ERR_NOT_TOKEN_OWNER, ERR_PROPOSAL_ENDED, ERR_PROPOSAL_NOT_FOUND,
    ERR_REGISTRY_NOT_CONTRACT, ERR_ZERO_MINIMUM_VOTES,
};
use types::Proposal;

// ============================================================
// Contract
// ============================================================

/// Token holders of an external ownership registry propose and vote on
/// +1 / -1 adjustments to a shared counter.
#[multiversx_sc::contract]
pub trait Ballot {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, registry_address: ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(&registry_address),
            ERR_REGISTRY_NOT_CONTRACT
        );

        self.registry_address().set(&registry_address);
        self.next_proposal_id().set(0u64);
        self.counter().set(0i64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createProposal
    // Any token holder can propose. Threshold is fixed per proposal.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(&self, is_add_proposal: bool, minimum_votes: u64) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_token_owner(&caller);
        require!(minimum_votes > 0, ERR_ZERO_MINIMUM_VOTES);

        let proposal_id = self.next_proposal_id().get();
        let proposal = Proposal::new(proposal_id, caller.clone(), is_add_proposal, minimum_votes);

        self.proposals(proposal_id).set(&proposal);
        self.next_proposal_id().set(proposal_id + 1);

        self.creation_event(proposal_id, &caller, is_add_proposal);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: voteProposal
    // One vote per holder per proposal. Only affirmative votes
    // count toward the threshold; reaching it finalizes.
    // ========================================================

    #[endpoint(voteProposal)]
    fn vote_proposal(&self, proposal_id: u64, in_favor: bool) {
        let caller = self.blockchain().get_caller();
        self.require_token_owner(&caller);
        self.require_proposal_exists(proposal_id);

        let mut proposal = self.proposals(proposal_id).get();
        require!(!proposal.has_ended, ERR_PROPOSAL_ENDED);
        require!(
            !self.voters(proposal_id).contains(&caller),
            ERR_ALREADY_VOTED
        );

        self.voters(proposal_id).insert(caller.clone());
        if in_favor {
            proposal.vote_count += 1;
        }

        self.vote_event(proposal_id, &caller, in_favor);

        if proposal.threshold_reached() {
            self.finalize(&mut proposal, in_favor);
        }

        self.proposals(proposal_id).set(&proposal);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Seals the proposal and applies its effect. Only reachable from a
    /// vote on an open proposal, so it runs at most once per proposal.
    fn finalize(&self, proposal: &mut Proposal<Self::Api>, in_favor: bool) {
        proposal.has_ended = true;

        let delta = proposal.counter_delta();
        self.counter().update(|counter| *counter += delta);

        self.finalize_event(proposal.id, proposal.is_add_proposal, in_favor);
    }

    fn require_token_owner(&self, address: &ManagedAddress) {
        let registry = self.registry_address().get();
        let token_count: u64 = self
            .tx()
            .to(&registry)
            .typed(ownership_registry_proxy::OwnershipRegistryProxy)
            .token_count(address.clone())
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(token_count > 0, ERR_NOT_TOKEN_OWNER);
    }

    fn require_proposal_exists(&self, proposal_id: u64) {
        require!(
            proposal_id < self.next_proposal_id().get(),
            ERR_PROPOSAL_NOT_FOUND
        );
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_proposal_exists(proposal_id);
        self.proposals(proposal_id).get()
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.next_proposal_id().get();
        if count == 0 || from >= total {
            return result;
        }
        let end = core::cmp::min(from.saturating_add(count), total);

        for id in from..end {
            result.push(self.proposals(id).get());
        }
        result
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.next_proposal_id().get()
    }

    #[view(getCounter)]
    fn get_counter(&self) -> i64 {
        self.counter().get()
    }

    #[view(hasVoted)]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> bool {
        self.require_proposal_exists(proposal_id);
        self.voters(proposal_id).contains(voter)
    }

    #[view(getVoters)]
    fn get_voters(&self, proposal_id: u64) -> MultiValueEncoded<ManagedAddress> {
        self.require_proposal_exists(proposal_id);
        let mut result = MultiValueEncoded::new();
        for voter in self.voters(proposal_id).iter() {
            result.push(voter);
        }
        result
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("creation")]
    fn creation_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] creator: &ManagedAddress,
        #[indexed] is_add_proposal: bool,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] in_favor: bool,
    );

    #[event("finalize")]
    fn finalize_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] is_add_proposal: bool,
        #[indexed] in_favor: bool,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getRegistryAddress)]
    #[storage_mapper("registryAddress")]
    fn registry_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("nextProposalId")]
    fn next_proposal_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("voters")]
    fn voters(&self, proposal_id: u64) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("counter")]
    fn counter(&self) -> SingleValueMapper<i64>;
}
