#![no_std]

multiversx_sc::imports!();

pub mod registry_mock_proxy;

/// Minimal non-fungible ownership registry used to drive the ballot in
/// scenario tests. Tokens are plain ids; only the owner of this contract
/// can mint, only a token's holder can transfer it.
#[multiversx_sc::contract]
pub trait OwnershipRegistryMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint]
    fn mint(&self, to: ManagedAddress, token_id: u64) {
        require!(self.token_owner(token_id).is_empty(), "token already minted");

        self.token_owner(token_id).set(&to);
        self.token_count(&to).update(|count| *count += 1);
    }

    #[endpoint]
    fn transfer(&self, to: ManagedAddress, token_id: u64) {
        let caller = self.blockchain().get_caller();
        require!(!self.token_owner(token_id).is_empty(), "token does not exist");
        require!(self.token_owner(token_id).get() == caller, "not the token holder");

        self.token_count(&caller).update(|count| *count -= 1);
        self.token_count(&to).update(|count| *count += 1);
        self.token_owner(token_id).set(&to);
    }

    #[view(ownerOf)]
    fn owner_of(&self, token_id: u64) -> ManagedAddress {
        require!(!self.token_owner(token_id).is_empty(), "token does not exist");
        self.token_owner(token_id).get()
    }

    #[view(getTokenCount)]
    #[storage_mapper("tokenCount")]
    fn token_count(&self, owner: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("tokenOwner")]
    fn token_owner(&self, token_id: u64) -> SingleValueMapper<ManagedAddress>;
}
