//! Lookup behavior as seen by a driver binding

use rp1210::error_code::{code_for, entries, lookup};
use rp1210::{
    describe, Command, ErrorCode, CMD_GENERIC_DRIVER_COMMAND, CMD_RESET_DEVICE, UNKNOWN_ERROR,
};
use std::sync::Arc;
use std::thread;

const PROBES: &[u16] = &[0, 1, 127, 128, 129, 151, 203, 455, 603, 999, 3000, 3008, 9999, u16::MAX];

#[test]
fn test_documented_scenarios() {
    assert_eq!(describe(128), "ERR_DLL_NOT_INITIALIZED");
    assert_eq!(describe(3008), "API_NO_DEVICES_FOUND");
    assert_eq!(describe(9999), "UNKNOWN_ERROR");
    assert_eq!(describe(0), "UNKNOWN_ERROR");
    assert_eq!(CMD_RESET_DEVICE, 0x0000);
    assert_eq!(CMD_GENERIC_DRIVER_COMMAND, 0x8000);
}

#[test]
fn test_every_entry_describes_itself() {
    for e in entries() {
        assert_eq!(describe(e.code), e.name);
        assert_eq!(lookup(e.code), Some(e));
        assert_eq!(code_for(e.name), Some(e.code));
    }
}

#[test]
fn test_every_command_round_trips() {
    for &command in Command::ALL {
        assert_eq!(Command::try_from(command.code()), Ok(command));
        assert_eq!(command.name().parse::<Command>(), Ok(command));
    }
}

#[test]
fn test_concurrent_threads_agree() {
    let expected: Arc<Vec<&'static str>> = Arc::new(PROBES.iter().map(|&c| describe(c)).collect());

    let handles: Vec<_> = (0..16)
        .map(|worker| {
            let expected = Arc::clone(&expected);
            thread::spawn(move || {
                for round in 0..1_000 {
                    let idx = (worker + round) % PROBES.len();
                    assert_eq!(describe(PROBES[idx]), expected[idx]);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_tasks_agree() {
    let mut tasks = Vec::new();
    for &code in PROBES {
        tasks.push(tokio::spawn(async move { (code, ErrorCode(code).describe()) }));
    }

    for task in tasks {
        let (code, name) = task.await.unwrap();
        if code == 3008 {
            assert_eq!(name, "API_NO_DEVICES_FOUND");
        }
        if code == 9999 {
            assert_eq!(name, UNKNOWN_ERROR);
        }
        assert_eq!(name, describe(code));
    }
}

#[test]
fn test_serde_shapes() {
    let json = serde_json::to_string(&ErrorCode(151)).unwrap();
    assert_eq!(json, "151");

    let back: ErrorCode = serde_json::from_str("3008").unwrap();
    assert_eq!(back.describe(), "API_NO_DEVICES_FOUND");

    let json = serde_json::to_value(lookup(128).unwrap()).unwrap();
    assert_eq!(json["name"], "ERR_DLL_NOT_INITIALIZED");
    assert_eq!(json["category"], "Client");

    let command: Command = serde_json::from_str("\"SetJ1939Baud\"").unwrap();
    assert_eq!(command.code(), 0x0023);
}
