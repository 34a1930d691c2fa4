// Application layer: ports and the lookup use case

pub mod lookup_use_case;
pub mod ports;

pub use lookup_use_case::LookupUseCase;

/// The orchestrator as wired by the binary and the read API.
pub type LookupService = LookupUseCase<dyn ports::RemoteQueryPort, dyn ports::FallbackCachePort>;
