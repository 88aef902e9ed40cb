//! End-to-end command flow through the executor

use taskline::config::ListConfig;
use taskline::engine::{Executor, Outcome};
use taskline::error::TrackerError;
use taskline::task::TaskKind;

fn executor(capacity: usize, release_full_on_delete: bool) -> Executor {
    Executor::new(&ListConfig {
        capacity,
        release_full_on_delete,
    })
}

#[test]
fn scenario_script_leaves_single_completed_task() {
    let mut exec = executor(100, false);

    let script = [
        "todo buy milk",
        "deadline submit report /by Friday",
        "list",
        "done 1",
        "delete 2",
        "list",
    ];

    let outcomes: Vec<Outcome> = script.iter().map(|line| exec.execute(line)).collect();

    assert!(matches!(outcomes[0], Outcome::TaskAdded { total: 1, .. }));
    assert!(matches!(outcomes[1], Outcome::TaskAdded { total: 2, .. }));

    match &outcomes[2] {
        Outcome::Listed(entries) => {
            assert_eq!(entries.len(), 2);
            assert_eq!(entries[0].1.description, "buy milk");
            assert_eq!(entries[1].1.description, "submit report");
        }
        other => panic!("expected listing, got {other:?}"),
    }

    assert!(matches!(&outcomes[3], Outcome::TaskMarkedDone(task) if task.done));
    assert!(matches!(
        &outcomes[4],
        Outcome::TaskDeleted { index: 2, task } if task.description == "submit report"
    ));

    match &outcomes[5] {
        Outcome::Listed(entries) => {
            assert_eq!(entries.len(), 1);
            let (number, task) = &entries[0];
            assert_eq!(*number, 1);
            assert_eq!(task.description, "buy milk");
            assert!(task.done);
            assert_eq!(task.kind, TaskKind::Todo);
        }
        other => panic!("expected listing, got {other:?}"),
    }

    assert_eq!(exec.tasks().len(), 1);
}

#[test]
fn listing_after_n_adds_numbers_in_insertion_order() {
    let mut exec = executor(100, false);

    for n in 1..=5 {
        exec.execute(&format!("todo job number {n}"));
    }

    match exec.execute("list") {
        Outcome::Listed(entries) => {
            assert_eq!(entries.len(), 5);
            for (position, (number, task)) in entries.iter().enumerate() {
                assert_eq!(*number, position + 1);
                assert_eq!(task.description, format!("job number {}", position + 1));
            }
        }
        other => panic!("expected listing, got {other:?}"),
    }
}

#[test]
fn full_list_only_answers_list_and_bye() {
    let mut exec = executor(3, false);
    exec.execute("todo a");
    exec.execute("todo b");
    exec.execute("event launch /at noon");

    for line in ["todo d", "deadline e /by f", "done 1", "delete 1", "help", "nonsense"] {
        assert!(
            matches!(exec.execute(line), Outcome::Error(TrackerError::ListFull)),
            "expected ListFull for {line:?}"
        );
    }

    assert!(matches!(exec.execute("list"), Outcome::Listed(_)));
    assert_eq!(exec.execute("bye"), Outcome::Exited);
    assert_eq!(exec.tasks().len(), 3);
}

#[test]
fn full_latch_is_sticky_across_the_executor() {
    let mut exec = executor(2, false);
    exec.execute("todo a");
    exec.execute("todo b");

    // The latch gates delete itself, so the list can never shrink again.
    assert!(matches!(
        exec.execute("delete 1"),
        Outcome::Error(TrackerError::ListFull)
    ));
    assert_eq!(exec.tasks().len(), 2);
}

#[test]
fn release_full_on_delete_reopens_the_list() {
    let mut exec = executor(2, true);
    exec.execute("todo a");
    exec.execute("todo b");

    // Adds are still rejected while latched...
    assert!(matches!(
        exec.execute("todo c"),
        Outcome::Error(TrackerError::ListFull)
    ));

    // ...but with the knob on, delete is admitted and releases the latch.
    assert!(matches!(
        exec.execute("delete 1"),
        Outcome::TaskDeleted { index: 1, .. }
    ));
    assert_eq!(exec.tasks().len(), 1);

    match exec.execute("todo c") {
        Outcome::TaskAdded { total, .. } => assert_eq!(total, 2),
        other => panic!("expected add after release, got {other:?}"),
    }
}

#[test]
fn resumed_executor_keeps_saved_state() {
    let mut exec = executor(100, false);
    exec.execute("todo buy milk");
    exec.execute("done 1");

    let saved = exec.tasks().to_vec();
    let mut resumed = Executor::with_tasks(saved, &ListConfig::default());

    match resumed.execute("list") {
        Outcome::Listed(entries) => {
            assert_eq!(entries.len(), 1);
            assert!(entries[0].1.done);
            assert_eq!(entries[0].1.description, "buy milk");
        }
        other => panic!("expected listing, got {other:?}"),
    }
}

#[test]
fn errors_surface_as_values_for_every_failure_class() {
    let mut exec = executor(100, false);

    assert!(matches!(
        exec.execute("list"),
        Outcome::Error(TrackerError::EmptyList)
    ));
    assert!(matches!(
        exec.execute("done 1"),
        Outcome::Error(TrackerError::EmptyList)
    ));
    assert!(matches!(
        exec.execute("delete 1"),
        Outcome::Error(TrackerError::IndexOutOfRange { index: 1, size: 0 })
    ));
    assert!(matches!(
        exec.execute("todo"),
        Outcome::Error(TrackerError::MissingArgument(_))
    ));
    assert!(matches!(
        exec.execute("deadline report Friday"),
        Outcome::Error(TrackerError::MissingArgument(_))
    ));
    assert!(matches!(
        exec.execute("what is this"),
        Outcome::Error(TrackerError::UnrecognizedCommand(_))
    ));

    exec.execute("todo real task");
    assert!(matches!(
        exec.execute("done 2"),
        Outcome::Error(TrackerError::IndexOutOfRange { index: 2, size: 1 })
    ));
}
