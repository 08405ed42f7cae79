// Unauthorized
pub const ERR_NOT_TOKEN_OWNER: &str = "sender does not own a token";

// InvalidParameter
pub const ERR_ZERO_MINIMUM_VOTES: &str = "minimum votes must be greater than zero";
pub const ERR_REGISTRY_NOT_CONTRACT: &str = "registry address must be a smart contract";

// NotFound
pub const ERR_PROPOSAL_NOT_FOUND: &str = "proposal id is nonexistent";

// AlreadyFinalized
pub const ERR_PROPOSAL_ENDED: &str = "proposal already executed";

// DuplicateVote
pub const ERR_ALREADY_VOTED: &str = "already voted on this proposal";
