// tests/recursive_trim.rs
//! Title upkeep over whole page trees.

mod support;

use notion_upkeep::{
    ChildBlock, DatabaseId, Parent, RichTextSegment, SubtreeWalker, Title, TitleNormalizer,
    TrimError, TrimOptions,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use support::*;

fn mention_title() -> Title {
    Title::new(vec![
        RichTextSegment::text("  "),
        RichTextSegment::mention("@Ada", json!({ "type": "user", "user": { "id": "ada" } })),
        RichTextSegment::text(" \t"),
    ])
}

fn workspace() -> Workspace {
    Workspace::new(2)
        .add(page_under(Parent::Workspace, 1, text_title(&[" Handbook "])))
        .add(subpage(1, 2, text_title(&["Onboarding  "])))
        .add(subpage(1, 3, mention_title()))
        .add(subpage(1, 4, text_title(&["\tPolicies", " "])))
        .add(subpage(2, 5, text_title(&["   "])))
        .add(subpage(4, 6, text_title(&["Leave"])))
}

#[tokio::test]
async fn every_title_in_the_tree_is_trimmed() {
    let workspace = workspace();
    let walker = SubtreeWalker::new(&workspace, TrimOptions::default());

    let report = walker.walk(workspace.root(1), &mut Vec::new()).await;

    assert!(report.is_clean());
    assert_eq!(report.pages_visited, 6);
    assert_eq!(report.titles_written, 6);

    let order: Vec<_> = workspace.writes().into_iter().map(|(page, _)| page).collect();
    assert_eq!(order, vec![id(1), id(2), id(3), id(4), id(5), id(6)]);

    assert_eq!(workspace.written_title(1), Some(text_title(&["Handbook"])));
    assert_eq!(workspace.written_title(2), Some(text_title(&["Onboarding"])));
    assert_eq!(workspace.written_title(4), Some(text_title(&["Policies"])));
    assert_eq!(workspace.written_title(5), Some(Title::default()));
    assert_eq!(workspace.written_title(6), Some(text_title(&["Leave"])));
}

#[tokio::test]
async fn mentions_survive_trimming_untouched() {
    let workspace = workspace();
    let walker = SubtreeWalker::new(&workspace, TrimOptions::default());

    walker.walk(workspace.root(1), &mut Vec::new()).await;

    let written = workspace.written_title(3).unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!(written.segments()[0], mention_title().segments()[1]);
}

#[tokio::test]
async fn progress_output_names_every_page() {
    let workspace = workspace();
    let walker = SubtreeWalker::new(&workspace, TrimOptions::default());
    let mut out = Vec::new();

    walker.walk(workspace.root(1), &mut out).await;

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text.lines().nth(2).unwrap(),
        "trimming title for page 00000003-0000-4000-8000-000000000003 (  •@Ada• \t)"
    );
    assert_eq!(text.lines().count(), 6);
}

#[tokio::test]
async fn rejected_update_does_not_stop_siblings_or_descendants() {
    let workspace = workspace().rejecting(2);
    let walker = SubtreeWalker::new(&workspace, TrimOptions::default());

    let report = walker.walk(workspace.root(1), &mut Vec::new()).await;

    assert_eq!(report.errors.len(), 1);
    let message = report.errors[0].to_string();
    assert!(message.contains(&id(2).to_string()), "{}", message);
    assert!(matches!(report.errors[0], TrimError::RemotePersist { .. }));

    assert_eq!(workspace.written_title(2), None);
    assert_eq!(workspace.written_title(5), Some(Title::default()));
    assert_eq!(workspace.written_title(6), Some(text_title(&["Leave"])));
}

#[tokio::test]
async fn database_rows_are_reported_and_their_children_still_visited() {
    let row = page_under(
        Parent::Database {
            database_id: DatabaseId::parse(id(90).as_str()).unwrap(),
        },
        10,
        text_title(&[" Row "]),
    );
    let workspace = Workspace::new(100)
        .add(row)
        .add(subpage(10, 11, text_title(&[" Notes "])));
    let walker = SubtreeWalker::new(&workspace, TrimOptions::default());

    let report = walker.walk(workspace.root(10), &mut Vec::new()).await;

    assert_eq!(report.errors.len(), 1);
    assert_eq!(
        report.errors[0].to_string(),
        format!("page {}: page type database_id not supported", id(10))
    );
    assert_eq!(workspace.written_title(10), None);
    assert_eq!(workspace.written_title(11), Some(text_title(&["Notes"])));
}

#[tokio::test]
async fn dangling_child_page_is_reported_as_not_found() {
    let workspace = Workspace::new(100)
        .add(page_under(Parent::Workspace, 1, text_title(&["Root"])))
        .with_block(1, ChildBlock::child_page(block(7), "Gone"));
    let walker = SubtreeWalker::new(&workspace, TrimOptions::default());

    let report = walker.walk(workspace.root(1), &mut Vec::new()).await;

    assert_eq!(report.errors.len(), 1);
    assert!(matches!(report.errors[0], TrimError::NotFound { .. }));
}

#[tokio::test]
async fn dry_run_touches_nothing() {
    let workspace = workspace();
    let options = TrimOptions {
        dry_run: true,
        ..TrimOptions::default()
    };
    let walker = SubtreeWalker::new(&workspace, options);
    let mut out = Vec::new();

    let report = walker.walk(workspace.root(1), &mut out).await;

    assert!(report.is_clean());
    assert_eq!(report.pages_visited, 6);
    assert_eq!(report.titles_written, 0);
    assert!(workspace.writes().is_empty());
    assert!(String::from_utf8(out)
        .unwrap()
        .lines()
        .all(|line| line.starts_with("would trim title for page")));
}

#[tokio::test]
async fn skip_unchanged_writes_only_dirty_titles() {
    let workspace = workspace();
    let options = TrimOptions {
        skip_unchanged: true,
        ..TrimOptions::default()
    };
    let walker = SubtreeWalker::new(&workspace, options);

    let report = walker.walk(workspace.root(1), &mut Vec::new()).await;

    assert!(report.is_clean());
    assert_eq!(report.titles_written, 5);
    assert_eq!(workspace.written_title(6), None);
}

#[tokio::test]
async fn single_page_trim_leaves_children_alone() {
    let workspace = workspace();
    let normalizer = TitleNormalizer::new(&workspace, TrimOptions::default());

    let outcome = normalizer
        .normalize(&workspace.root(1), &mut Vec::new())
        .await
        .unwrap();

    assert!(outcome.changed);
    assert_eq!(workspace.writes().len(), 1);
}
