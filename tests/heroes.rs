mod common;

use std::time::Duration;

use herodex::heroes::HeroesView;
use herodex::messages::MessageLog;
use herodex::mock;
use herodex::models::Hero;
use herodex::service::HeroService;

use common::{failing_router, spawn_api, unreachable_url};

fn view_at(base_url: &str) -> HeroesView {
    HeroesView::new(HeroService::new(base_url, MessageLog::new()))
}

#[tokio::test]
async fn load_replaces_the_collection_wholesale() {
    let base_url = spawn_api(mock::router()).await;
    let mut view = view_at(&base_url);

    view.load().await;
    assert_eq!(view.heroes().len(), 10);

    // backend changes between loads; the second load must not merge
    view.service().delete_hero(11).await.expect("deleted");
    view.load().await;
    assert_eq!(view.heroes().len(), 9);
    assert!(!view.heroes().iter().any(|h| h.id == 11));
}

#[tokio::test]
async fn add_appends_the_assigned_record_exactly_once() {
    let base_url = spawn_api(mock::router_with(vec![Hero {
        id: 41,
        name: "Storm".to_string(),
    }]))
    .await;
    let mut view = view_at(&base_url);

    view.load().await;
    view.add("Zeus").await;

    let zeus = Hero {
        id: 42,
        name: "Zeus".to_string(),
    };
    assert_eq!(view.heroes().last(), Some(&zeus));
    assert_eq!(view.heroes().iter().filter(|h| **h == zeus).count(), 1);
}

#[tokio::test]
async fn blank_add_is_a_noop_without_network() {
    let base_url = unreachable_url().await;
    let mut view = view_at(&base_url);

    view.add("").await;
    view.add("   ").await;

    assert!(view.heroes().is_empty());
    assert!(view.service().messages().is_empty());
}

#[tokio::test]
async fn failed_add_changes_nothing_visible() {
    let base_url = spawn_api(failing_router()).await;
    let mut view = view_at(&base_url);

    view.add("Zeus").await;

    assert!(view.heroes().is_empty());
    let messages = view.service().messages().messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].text.contains("add_hero failed"));
}

#[tokio::test]
async fn delete_removes_locally_before_the_backend_confirms() {
    let base_url = spawn_api(mock::router()).await;
    let mut view = view_at(&base_url);
    view.load().await;

    let first = view.heroes()[0].clone();
    view.delete(&first);

    // local removal is synchronous, ahead of the network round trip
    assert_eq!(view.heroes().len(), 9);
    assert!(!view.heroes().iter().any(|h| h.id == first.id));

    // the fired request lands on its own schedule; poll until it does
    let mut confirmed = false;
    for _ in 0..50 {
        if view.service().get_hero(first.id).await.is_none() {
            confirmed = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert!(confirmed, "backend never confirmed the delete");
}

#[tokio::test]
async fn failed_delete_is_not_reconciled() {
    let base_url = spawn_api(mock::router_with(vec![
        Hero {
            id: 1,
            name: "Alpha".to_string(),
        },
        Hero {
            id: 2,
            name: "Beta".to_string(),
        },
    ]))
    .await;
    let mut view = view_at(&base_url);
    view.load().await;

    // the record disappears from the backend behind the view's back,
    // so the fired delete will fail
    view.service().delete_hero(1).await.expect("deleted");
    view.service().messages().clear();

    let alpha = view.heroes()[0].clone();
    view.delete(&alpha);
    assert_eq!(view.heroes().len(), 1);

    let mut failed = false;
    for _ in 0..50 {
        let messages = view.service().messages().messages();
        if messages
            .iter()
            .any(|m| m.text.contains("delete_hero id=1 failed"))
        {
            failed = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert!(failed, "fired delete never reported a failure");
    // still gone locally; only a full reload could bring anything back
    assert_eq!(view.heroes().len(), 1);
}
