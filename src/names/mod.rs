// nct: Names Module
//
// Typed access to the name database (`name_show`, `name_list`,
// `name_update`) and wallet unlocking, layered on the gateway.

mod client;
mod models;

pub use client::{NAME_LIST, NAME_SHOW, NAME_UPDATE, NameClient, WALLET_PASSPHRASE};
pub use models::NameRecord;
