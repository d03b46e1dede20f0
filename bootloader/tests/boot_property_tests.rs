//! Property-based tests for the boot sequence

use fc_api::{PersistentStore, Platform, StoreStatus, SystemRuntime};
use fc_bootloader::boot_stage::{BootConfig, BootCoordinator, BootOutcome};
use fc_bootloader::BootError;
use proptest::prelude::*;

/// Collaborator answers for one boot
#[derive(Debug, Clone, Copy)]
struct Script {
    first_init: StoreStatus,
    erase: StoreStatus,
    second_init: StoreStatus,
    platform_ready: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Calls {
    init: usize,
    erase: usize,
    platform: usize,
    launch: usize,
}

struct ScriptedStore {
    script: Script,
    calls: Calls,
}

impl PersistentStore for ScriptedStore {
    fn init(&mut self) -> StoreStatus {
        self.calls.init += 1;
        if self.calls.init == 1 {
            self.script.first_init
        } else {
            self.script.second_init
        }
    }

    fn erase(&mut self) -> StoreStatus {
        self.calls.erase += 1;
        self.script.erase
    }
}

struct ScriptedPlatform {
    ready: bool,
    calls: usize,
}

impl Platform for ScriptedPlatform {
    fn init(&mut self) -> bool {
        self.calls += 1;
        self.ready
    }
}

#[derive(Default)]
struct CountingRuntime {
    calls: usize,
}

impl SystemRuntime for CountingRuntime {
    fn launch(&mut self) {
        self.calls += 1;
    }
}

fn boot(script: Script) -> (BootOutcome, Calls) {
    let store = ScriptedStore {
        script,
        calls: Calls::default(),
    };
    let platform = ScriptedPlatform {
        ready: script.platform_ready,
        calls: 0,
    };
    let config = BootConfig::new().with_summary(false);

    let runtime = CountingRuntime::default();
    let mut coordinator = BootCoordinator::new(config, store, platform, runtime);
    let outcome = coordinator.run();
    let (store, platform, runtime) = coordinator.into_parts();

    let calls = Calls {
        platform: platform.calls,
        launch: runtime.calls,
        ..store.calls
    };
    (outcome, calls)
}

fn store_status() -> impl Strategy<Value = StoreStatus> {
    prop_oneof![
        Just(StoreStatus::Ok),
        Just(StoreStatus::NoFreePages),
        Just(StoreStatus::NewVersionFound),
        Just(StoreStatus::OtherFailure),
    ]
}

fn recoverable_status() -> impl Strategy<Value = StoreStatus> {
    prop_oneof![Just(StoreStatus::NoFreePages), Just(StoreStatus::NewVersionFound)]
}

prop_compose! {
    fn script_from(
        first_init_strategy: BoxedStrategy<StoreStatus>,
        erase_strategy: BoxedStrategy<StoreStatus>,
    )(
        first_init in first_init_strategy,
        erase in erase_strategy,
        second_init in store_status(),
        platform_ready in any::<bool>(),
    ) -> Script {
        Script { first_init, erase, second_init, platform_ready }
    }
}

fn script() -> impl Strategy<Value = Script> {
    script_from(store_status().boxed(), store_status().boxed())
}

proptest! {
    #[test]
    fn prop_healthy_store_is_never_erased(
        script in script_from(Just(StoreStatus::Ok).boxed(), store_status().boxed())
    ) {
        let (_, calls) = boot(script);
        prop_assert_eq!(calls.erase, 0);
        prop_assert_eq!(calls.init, 1);
        prop_assert_eq!(calls.platform, 1);
    }

    #[test]
    fn prop_recoverable_store_gets_exactly_one_erase(
        script in script_from(recoverable_status().boxed(), Just(StoreStatus::Ok).boxed())
    ) {
        let (outcome, calls) = boot(script);
        prop_assert_eq!(calls.erase, 1);
        prop_assert_eq!(calls.init, 2);

        if script.second_init.is_ok() {
            prop_assert_eq!(calls.platform, 1);
        } else {
            prop_assert_eq!(
                outcome,
                BootOutcome::Aborted(BootError::StoreRetryFailed(script.second_init))
            );
            prop_assert_eq!(calls.platform, 0);
            prop_assert_eq!(calls.launch, 0);
        }
    }

    #[test]
    fn prop_other_failure_aborts_immediately(
        script in script_from(Just(StoreStatus::OtherFailure).boxed(), store_status().boxed())
    ) {
        let (outcome, calls) = boot(script);
        prop_assert_eq!(calls, Calls { init: 1, ..Calls::default() });
        prop_assert!(outcome.is_aborted());
    }

    #[test]
    fn prop_launch_only_on_full_success(script in script()) {
        let (outcome, calls) = boot(script);
        match outcome {
            BootOutcome::Launched => {
                prop_assert!(script.platform_ready);
                prop_assert_eq!(calls.launch, 1);
            }
            BootOutcome::Halted => {
                prop_assert!(!script.platform_ready);
                prop_assert_eq!(calls.platform, 1);
                prop_assert_eq!(calls.launch, 0);
            }
            BootOutcome::Aborted(error) => {
                prop_assert!(error.store_status().is_some());
                prop_assert_eq!(calls.platform, 0);
                prop_assert_eq!(calls.launch, 0);
            }
        }
    }

    #[test]
    fn prop_never_more_than_one_retry(script in script()) {
        let (_, calls) = boot(script);
        prop_assert!(calls.erase <= 1);
        prop_assert!(calls.init <= 2);
        prop_assert!(calls.init == 1 || calls.erase == 1);
    }

    #[test]
    fn prop_same_answers_same_outcome(script in script()) {
        let (first, first_calls) = boot(script);
        let (second, second_calls) = boot(script);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first_calls, second_calls);
    }
}
