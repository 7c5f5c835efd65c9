use pretty_assertions::assert_eq;

use super::*;
use crate::test_support::RecordingPrompts;

fn editor() -> SubprocessHandle {
	SubprocessHandle::new("vi").arg("COMMIT_EDITMSG")
}

#[test]
fn success_without_handle_proceeds_silently() {
	let mut slot = SubprocessSlot::default();
	let mut prompts = RecordingPrompts::default();

	let outcome = resolve(Ok(None), &mut slot, &mut prompts);

	assert_eq!(outcome, CommandOutcome::Proceed);
	assert!(outcome.should_continue());
	assert!(!slot.is_pending());
	assert!(prompts.errors.is_empty());
}

#[test]
fn handle_is_registered_and_stops_the_handler() {
	let mut slot = SubprocessSlot::default();
	let mut prompts = RecordingPrompts::default();

	let outcome = resolve(Ok(Some(editor())), &mut slot, &mut prompts);

	assert_eq!(outcome, CommandOutcome::SubprocessPending(editor()));
	assert!(!outcome.should_continue());
	assert_eq!(slot.pending(), Some(&editor()));
	assert!(prompts.errors.is_empty());
	assert!(matches!(outcome.into_flow(), Err(GuiError::SubprocessHandoff)));
}

#[test]
fn failure_is_surfaced_once_and_stops_the_handler() {
	let mut slot = SubprocessSlot::default();
	let mut prompts = RecordingPrompts::default();

	let outcome = resolve(Err(CommandError::failed("nothing to commit")), &mut slot, &mut prompts);

	assert_eq!(outcome, CommandOutcome::Fatal(CommandError::failed("nothing to commit")));
	assert_eq!(prompts.errors, vec!["nothing to commit".to_string()]);
	assert!(!slot.is_pending());
	assert!(!outcome.into_flow().unwrap());
}

#[test]
fn bare_sentinel_has_nothing_to_run() {
	let mut slot = SubprocessSlot::default();
	let mut prompts = RecordingPrompts::default();

	let outcome = resolve(Err(CommandError::SubprocessRequested), &mut slot, &mut prompts);

	assert_eq!(outcome, CommandOutcome::Proceed);
	assert!(!slot.is_pending());
	assert!(prompts.errors.is_empty());
}

#[test]
fn newer_handle_replaces_a_stale_one() {
	let mut slot = SubprocessSlot::default();
	let mut prompts = RecordingPrompts::default();
	let other = SubprocessHandle::new("git").args(["rebase", "--continue"]);

	resolve(Ok(Some(editor())), &mut slot, &mut prompts);
	resolve(Ok(Some(other.clone())), &mut slot, &mut prompts);

	assert_eq!(slot.take(), Some(other));
	assert_eq!(slot.take(), None);
}
