use std::io::Cursor;

use todo_shell::{
    app::{ui::Ui, App},
    parser,
    todolist::MAX_TASKS,
};

/// Runs a whole session over the given lines and returns the final state
/// plus everything written to the screen.
fn session(lines: &[&str]) -> (App, String) {
    let input = Cursor::new(lines.join("\n"));
    let mut app = App::default();
    let mut ui = Ui::new(Vec::new());
    app.run(input, &mut ui, |_| Ok(())).unwrap();
    (app, String::from_utf8(ui.into_inner()).unwrap())
}

fn rendered(app: &App) -> Vec<String> {
    app.list.items.iter().map(|t| t.to_string()).collect()
}

#[test]
fn todo_then_list() {
    let (app, out) = session(&["todo read book", "list", "bye"]);
    assert_eq!(rendered(&app), ["[T][ ] read book"]);
    assert!(out.contains("\n1. [T][ ] read book\n"));
    assert!(out.contains("Gotcha. I've added this task:"));
    assert!(out.contains("You have a total of 1 tasks now."));
}

#[test]
fn deadline_done_list() {
    let (app, out) = session(&["deadline submit report /by 2024-05-01", "done 1", "list"]);
    assert_eq!(rendered(&app), ["[D][X] submit report (by: 2024 May 01)"]);
    assert!(out.contains("Task submit report marked as complete."));
}

#[test]
fn delete_compacts() {
    let (app, out) = session(&[
        "event conference /at 2024-12-31",
        "event party /at 2025-01-01",
        "delete 1",
        "list",
    ]);
    assert_eq!(rendered(&app), ["[E][ ] party (at: 2025 Jan 01)"]);
    assert!(out.contains("Removed task: [E][ ] conference (at: 2024 Dec 31)"));
    assert!(out.contains("\n1. [E][ ] party (at: 2025 Jan 01)\n"));
}

#[test]
fn bad_index_keeps_going() {
    let (app, out) = session(&["done abc", "todo after"]);
    assert!(out.contains("Index is not a valid number."));
    assert_eq!(app.list.total(), 1);
}

#[test]
fn bad_date() {
    let (app, out) = session(&["deadline thing /by notadate"]);
    assert!(app.list.is_empty());
    assert!(out.contains("Date could not be parsed."));
}

#[test]
fn list_fills_up() {
    let lines = vec!["todo x"; MAX_TASKS + 1];
    let (app, out) = session(&lines);
    assert_eq!(app.list.total(), MAX_TASKS);
    assert_eq!(out.matches("Task list is full.").count(), 1);
}

#[test]
fn bye_stops_reading() {
    let (app, out) = session(&["todo one", "BYE", "todo two"]);
    assert_eq!(app.list.total(), 1);
    assert!(out.trim_end().ends_with("________________________________________"));
    assert!(out.contains("Have a nice day!"));
}

#[test]
fn adds_minus_deletes() {
    let (app, _) = session(&[
        "todo a",
        "todo b",
        "deadline c /by 2024-01-01",
        "delete 2",
        "delete 5",
        "todo d",
        "delete 1",
    ]);
    // 4 adds, 2 successful deletes
    assert_eq!(app.list.total(), 2);
}

#[test]
fn find_is_subsequence_of_list() {
    let (_, out) = session(&[
        "todo read book",
        "todo wash car",
        "event book club /at 2024-06-01",
        "list",
        "find book",
    ]);
    let blocks: Vec<&str> = out.split("________________________________________\n").collect();
    let list_block = blocks.iter().rev().find(|b| b.starts_with("1. ")).unwrap();
    let find_block = blocks
        .iter()
        .find(|b| b.starts_with("Here are the matching tasks"))
        .unwrap();

    let list_lines: Vec<&str> = list_block.lines().collect();
    let found: Vec<&str> = find_block.lines().skip(1).collect();
    assert_eq!(found, ["1. [T][ ] read book", "3. [E][ ] book club (at: 2024 Jun 01)"]);
    for line in found {
        assert!(list_lines.contains(&line));
    }
}

#[test]
fn failed_commands_leave_list_unchanged() {
    let (before, _) = session(&["todo keep me"]);
    let bad = [
        "delete 2",
        "done 0",
        "todo ",
        "deadline x",
        "deadline /by 2024-01-01",
        "event y /at ",
        "event y /at 2024-13-01",
        "frobnicate",
    ];
    for line in bad {
        assert!(parser::parse(line, &before.list).is_err(), "{line}");
    }
    let mut lines = vec!["todo keep me"];
    lines.extend(bad);
    let (after, _) = session(&lines);
    assert_eq!(after.list, before.list);
}

#[test]
fn done_twice_is_stable() {
    let (once, _) = session(&["todo x", "done 1"]);
    let (twice, _) = session(&["todo x", "done 1", "done 1"]);
    assert_eq!(once.list, twice.list);
}

#[test]
fn end_of_input_acts_like_bye() {
    let (app, out) = session(&["todo x"]);
    assert_eq!(app.list.total(), 1);
    assert!(out.contains("Have a nice day!"));
}

#[test]
fn invalid_utf8_line_is_rejected_and_session_continues() {
    let input = Cursor::new(b"todo ok\n\xff\xfe\r\ntodo after\nbye\n".to_vec());
    let mut app = App::default();
    let mut ui = Ui::new(Vec::new());
    app.run(input, &mut ui, |_| Ok(())).unwrap();
    let out = String::from_utf8(ui.into_inner()).unwrap();

    assert!(out.contains("Unknown command."));
    assert_eq!(app.list.total(), 2);
    assert!(out.contains("Have a nice day!"));
}
