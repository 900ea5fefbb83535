//! End-to-end panel lifecycle against the in-memory backend: open, change,
//! submit, reset, upload, delete, create.

use anyhow::Result;
use pagedeck_editor::fake::FakeBackend;
use pagedeck_editor::{
    load_site, BoxStyleField, ChildField, ChildForm, ChildStyleField, ComponentField, EditorError,
    FooterField, FooterForm, HeaderField, HeaderForm, MobileSectionForm, Panel, PanelTarget,
    SaveState, SectionForm, TextStyleField,
};
use pagedeck_model::{BackgroundType, Child, Component, ComponentType, Site};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn sample_site() -> Site {
    let mut site = Site::new(1, "acme", "acme.example", "admin@acme.example");
    let mut hero = Component::new(1, 1, ComponentType::Section, "hero");
    hero.children.push(Child::new(10, 1));
    site.components.push(hero);
    site.components
        .push(Component::new(2, 1, ComponentType::Inquiry, "contact"));
    site
}

#[tokio::test]
async fn submit_persists_snapshot_and_adopts_server_copy() -> Result<()> {
    init_tracing();
    let backend = FakeBackend::new(sample_site());
    let mut store = load_site(&backend, 1).await?;

    let mut panel: Panel<SectionForm> = Panel::open(&store, PanelTarget::Component(1))?;
    panel.change(
        &mut store,
        ComponentField::Style(BoxStyleField::Height(Some("300px".to_string()))),
    )?;
    panel.change(&mut store, ComponentField::Title(Some("Welcome".to_string())))?;
    assert_eq!(store.dirty_panel(), Some(PanelTarget::Component(1)));

    panel.submit(&mut store, &backend).await?;

    assert_eq!(panel.save_state(), SaveState::Idle);
    assert_eq!(store.dirty_panel(), None);
    assert_eq!(store.site(), store.canonical());

    let component = backend.site().component(1).cloned().unwrap();
    assert_eq!(component.title.as_deref(), Some("Welcome"));
    assert_eq!(
        component.component_style.unwrap().height.as_deref(),
        Some("300px")
    );
    Ok(())
}

#[tokio::test]
async fn failed_submit_keeps_optimistic_edits() -> Result<()> {
    init_tracing();
    let backend = FakeBackend::new(sample_site());
    let mut store = load_site(&backend, 1).await?;

    let mut panel: Panel<SectionForm> = Panel::open(&store, PanelTarget::Component(1))?;
    panel.change(&mut store, ComponentField::Title(Some("Welcome".to_string())))?;

    backend.fail_next_update();
    let err = panel.submit(&mut store, &backend).await.unwrap_err();
    assert!(matches!(err, EditorError::Remote(_)));

    // No rollback: the working document keeps the user's value, the
    // canonical one does not, and the panel is idle again.
    assert_eq!(panel.save_state(), SaveState::Idle);
    assert_eq!(
        store.site().component(1).unwrap().title.as_deref(),
        Some("Welcome")
    );
    assert_eq!(store.canonical().component(1).unwrap().title, None);
    assert_eq!(store.dirty_panel(), Some(PanelTarget::Component(1)));
    Ok(())
}

#[tokio::test]
async fn refetched_server_copy_wins_over_submitted_values() -> Result<()> {
    init_tracing();
    let backend = FakeBackend::new(sample_site());
    let mut store = load_site(&backend, 1).await?;

    let mut panel: Panel<SectionForm> = Panel::open(&store, PanelTarget::Component(1))?;
    panel.change(&mut store, ComponentField::Title(Some("Welcome".to_string())))?;

    // The backend acknowledges but normalizes the value away.
    backend.ignore_updates(true);
    panel.submit(&mut store, &backend).await?;

    assert_eq!(store.site().component(1).unwrap().title, None);
    assert_eq!(panel.form().title, "");
    Ok(())
}

#[tokio::test]
async fn reset_restores_canonical_values_for_this_panel_only() -> Result<()> {
    init_tracing();
    let backend = FakeBackend::new(sample_site());
    let mut store = load_site(&backend, 1).await?;

    let mut header: Panel<HeaderForm> = Panel::open(&store, PanelTarget::Header)?;
    header.change(&mut store, HeaderField::Height(Some("80px".to_string())))?;

    let mut section: Panel<SectionForm> = Panel::open(&store, PanelTarget::Component(1))?;
    section.change(&mut store, ComponentField::Name("renamed".to_string()))?;

    section.reset(&mut store)?;

    assert_eq!(section.form().name, "hero");
    assert_eq!(store.site().component(1).unwrap().name, "hero");
    // The header panel's unsubmitted edit is untouched.
    assert_eq!(
        store.site().header.as_ref().unwrap().height.as_deref(),
        Some("80px")
    );
    Ok(())
}

#[tokio::test]
async fn upload_writes_reference_into_image_field() -> Result<()> {
    init_tracing();
    let backend = FakeBackend::new(sample_site());
    let mut store = load_site(&backend, 1).await?;

    let mut panel: Panel<HeaderForm> = Panel::open(&store, PanelTarget::Header)?;
    panel.upload(&mut store, &backend, vec![0xFF, 0xD8]).await?;

    assert_eq!(panel.form().logo, "upload://1");
    assert_eq!(
        store.site().header.as_ref().unwrap().logo.as_deref(),
        Some("upload://1")
    );
    Ok(())
}

#[tokio::test]
async fn rejected_upload_leaves_form_untouched() -> Result<()> {
    init_tracing();
    let backend = FakeBackend::new(sample_site());
    let mut store = load_site(&backend, 1).await?;

    let mut panel: Panel<HeaderForm> = Panel::open(&store, PanelTarget::Header)?;
    backend.fail_next_upload();
    let err = panel
        .upload(&mut store, &backend, vec![0xFF, 0xD8])
        .await
        .unwrap_err();

    assert!(matches!(err, EditorError::Remote(_)));
    assert_eq!(panel.form().logo, "");
    assert!(store.site().header.is_none());
    Ok(())
}

#[tokio::test]
async fn delete_soft_deletes_and_refetches() -> Result<()> {
    init_tracing();
    let backend = FakeBackend::new(sample_site());
    let mut store = load_site(&backend, 1).await?;

    let mut panel: Panel<ChildForm> = Panel::open(&store, PanelTarget::Child(10))?;
    panel.delete(&mut store, &backend).await?;

    let component = store.site().component(1).unwrap();
    assert_eq!(component.visible_children().count(), 0);
    // The row survives as soft-deleted.
    assert!(store.site().child(10).unwrap().is_delete);

    // The panel can no longer be reopened over the deleted child.
    assert!(Panel::<ChildForm>::open(&store, PanelTarget::Child(10)).is_err());
    Ok(())
}

#[tokio::test]
async fn chrome_panels_cannot_be_deleted() -> Result<()> {
    init_tracing();
    let backend = FakeBackend::new(sample_site());
    let mut store = load_site(&backend, 1).await?;

    let mut panel: Panel<HeaderForm> = Panel::open(&store, PanelTarget::Header)?;
    let err = panel.delete(&mut store, &backend).await.unwrap_err();

    assert!(matches!(err, EditorError::Unsupported));
    Ok(())
}

#[tokio::test]
async fn create_component_and_child_adopt_backend_ids() -> Result<()> {
    init_tracing();
    let backend = FakeBackend::new(sample_site());
    let mut store = load_site(&backend, 1).await?;

    pagedeck_editor::create_component(&mut store, &backend, ComponentType::Section).await?;
    let new_id = store
        .site()
        .components
        .iter()
        .map(|c| c.id)
        .max()
        .unwrap();
    assert!(new_id > 10);
    assert_eq!(
        store.site().component(new_id).unwrap().component_type,
        ComponentType::Section
    );

    pagedeck_editor::create_child(&mut store, &backend, new_id).await?;
    let component = store.site().component(new_id).unwrap();
    assert_eq!(component.visible_children().count(), 1);
    Ok(())
}

#[tokio::test]
async fn validation_failure_blocks_the_round_trip() -> Result<()> {
    init_tracing();
    let backend = FakeBackend::new(sample_site());
    let mut store = load_site(&backend, 1).await?;

    let mut panel: Panel<SectionForm> = Panel::open(&store, PanelTarget::Component(1))?;
    panel.change(&mut store, ComponentField::Name(" ".to_string()))?;

    let err = panel.submit(&mut store, &backend).await.unwrap_err();
    assert!(matches!(err, EditorError::Validation(_)));
    // Nothing reached the backend.
    assert_eq!(backend.site().component(1).unwrap().name, "hero");
    Ok(())
}

#[tokio::test]
async fn desktop_submit_preserves_mobile_text_styling() -> Result<()> {
    init_tracing();
    let backend = FakeBackend::new(sample_site());
    let mut store = load_site(&backend, 1).await?;

    let mut mobile: Panel<MobileSectionForm> =
        Panel::open(&store, PanelTarget::MobileComponent(1))?;
    mobile.change(
        &mut store,
        ComponentField::TitleStyle(TextStyleField::MobileSize(Some("12px".to_string()))),
    )?;
    mobile.submit(&mut store, &backend).await?;

    let mut desktop: Panel<SectionForm> = Panel::open(&store, PanelTarget::Component(1))?;
    desktop.change(
        &mut store,
        ComponentField::TitleStyle(TextStyleField::Size(Some("20px".to_string()))),
    )?;
    desktop.submit(&mut store, &backend).await?;

    // The two panels share the title style group; each submit carries only
    // its own variant's columns, so neither wipes the other's.
    let style = backend
        .site()
        .component(1)
        .unwrap()
        .title_style
        .clone()
        .unwrap();
    assert_eq!(style.mobile_size.as_deref(), Some("12px"));
    assert_eq!(style.size.as_deref(), Some("20px"));
    Ok(())
}

#[tokio::test]
async fn change_rejects_fields_the_panel_does_not_own() -> Result<()> {
    init_tracing();
    let backend = FakeBackend::new(sample_site());
    let mut store = load_site(&backend, 1).await?;

    let mut panel: Panel<SectionForm> = Panel::open(&store, PanelTarget::Component(1))?;
    let err = panel
        .change(
            &mut store,
            ComponentField::MobileStyle(BoxStyleField::Height(Some("50px".to_string()))),
        )
        .unwrap_err();

    assert!(matches!(err, EditorError::Unsupported));
    // Neither the snapshot nor the shared document was touched.
    assert_eq!(store.site().component(1).unwrap().component_mobile_style, None);
    assert_eq!(store.dirty_panel(), None);
    Ok(())
}

#[tokio::test]
async fn footer_form_serves_both_slots() -> Result<()> {
    init_tracing();
    let backend = FakeBackend::new(sample_site());
    let mut store = load_site(&backend, 1).await?;

    let mut desktop: Panel<FooterForm> = Panel::open(&store, PanelTarget::Footer)?;
    let mut mobile: Panel<FooterForm> = Panel::open(&store, PanelTarget::MobileFooter)?;

    desktop.change(&mut store, FooterField::Terms(Some("Terms".to_string())))?;
    mobile.change(&mut store, FooterField::Terms(Some("M-Terms".to_string())))?;
    desktop.submit(&mut store, &backend).await?;
    mobile.submit(&mut store, &backend).await?;

    let site = backend.site();
    assert_eq!(site.footer.unwrap().terms.as_deref(), Some("Terms"));
    assert_eq!(site.mobile_footer.unwrap().terms.as_deref(), Some("M-Terms"));
    Ok(())
}

#[tokio::test]
async fn background_type_switch_clears_background_everywhere() -> Result<()> {
    init_tracing();
    let backend = FakeBackend::new(sample_site());
    let mut store = load_site(&backend, 1).await?;

    let mut panel: Panel<ChildForm> = Panel::open(&store, PanelTarget::Child(10))?;
    panel.change(
        &mut store,
        ChildField::Style(ChildStyleField::Background(Some("#abc".to_string()))),
    )?;
    panel.change(
        &mut store,
        ChildField::Style(ChildStyleField::BackgroundType(BackgroundType::Image)),
    )?;

    assert_eq!(panel.form().child_style.background, None);
    let style = store
        .site()
        .child(10)
        .unwrap()
        .child_style
        .as_ref()
        .unwrap();
    assert_eq!(style.background, None);
    assert_eq!(style.background_type, Some(BackgroundType::Image));
    Ok(())
}
