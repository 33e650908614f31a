use mock_ledger::SimLedger;
use overdrive_core::SutAdapter;
use std::sync::Arc;

/// A fresh simulated ledger plus the same instance behind the adapter
/// capability, the way a workload receives it.
#[allow(unused)]
pub fn sim() -> (Arc<SimLedger>, Arc<dyn SutAdapter>) {
    let ledger = Arc::new(SimLedger::new());
    let adapter: Arc<dyn SutAdapter> = ledger.clone();
    (ledger, adapter)
}
