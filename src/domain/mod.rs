// Exchange listings and trading pairs
pub mod trading;

// Set reconciliation core
pub mod reconciliation;

// Output tables
pub mod report;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
