//! Chemical Structure Module
//!
//! Pure proxy to the NCI CACTUS structure resolver: a SMILES string in,
//! an SDF document out. No decision logic beyond mapping the remote
//! result or failure onto the response contract.

pub mod handlers;
