// Adapters layer: concrete implementations for external systems (storage backends).

pub mod storage;
