// Adapters layer: concrete implementations for external systems.

pub mod route53;

pub use route53::Route53Client;
