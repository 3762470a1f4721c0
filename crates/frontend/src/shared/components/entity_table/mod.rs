//! Generic, configuration-driven paginated entity table.
//!
//! One component serves every entity: the config names the entity and its
//! columns, the registry supplies the data source, rows stay raw JSON and
//! each cell goes through `resolve_cell`.

pub mod cell;
pub mod state;

use self::cell::EntityCell;
use self::state::{create_state, FetchOutcome, LoadStatus};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::api::{use_entity_service, EntityService};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::badge::{Badge as UiBadge, Tone};
use crate::shared::icons::icon;
use contracts::shared::entity_registry::{DataSource, EntityBinding, EntityRegistry};
use contracts::shared::table::{resolve_cell, TableConfig};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// How long the "deleted" notice stays visible.
const MESSAGE_TIMEOUT_MS: u32 = 3000;

#[component]
pub fn EntityTable(
    config: TableConfig,
    /// Opens the edit form of the row with the given id
    #[prop(optional)]
    on_edit: Option<Callback<String>>,
) -> impl IntoView {
    if let Err(e) = config.validate() {
        log::error!("{}", e);
        return view! { <div class="alert alert--error">{e}</div> }.into_any();
    }

    match EntityRegistry::global().resolve(config.entity) {
        DataSource::Registered(binding) => view! {
            <RegisteredTable config=config binding=binding on_edit=on_edit />
        }
        .into_any(),
        DataSource::Unregistered { name } => {
            log::warn!("table '{}': no data source for '{}'", config.title, name);
            view! {
                <div class="page__header">
                    <div class="page__header-left">
                        <h1 class="page__title">{config.title}</h1>
                    </div>
                </div>
                <div class="page__content">
                    <div class="entity-table__placeholder">
                        {format!("No data available for {}", name)}
                    </div>
                </div>
            }
            .into_any()
        }
    }
}

/// Column span of the single-cell rows (loading, error, empty).
fn full_row_span(config: &TableConfig) -> usize {
    config.columns.len().max(1)
}

#[component]
fn RegisteredTable(
    config: TableConfig,
    /// Data source resolved from `config.entity`; every request goes through its routes.
    binding: EntityBinding,
    #[prop(optional_no_strip)] on_edit: Option<Callback<String>>,
) -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let service = StoredValue::new(use_entity_service());
    let state = create_state();
    let (message, set_message) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let deleting = RwSignal::new(None::<String>);
    let kind = binding.kind;

    let columns = StoredValue::new(config.columns.clone());
    let column_count = full_row_span(&config);
    let create_tab = config.create_tab;
    let title = config.title;
    let shows_create = config.shows_create();

    let load_page = move || {
        let service = service.get_value();
        spawn_local(async move {
            loop {
                let Some((seq, request)) = state.try_update(|s| s.begin_fetch()) else {
                    return;
                };
                log!(
                    "📋 {}: fetching offset={} limit={}",
                    kind.name(),
                    request.offset,
                    request.limit
                );
                let result = service.fetch_page_at(binding, request).await;
                if let Err(e) = &result {
                    log::error!("{} list failed: {}", kind.name(), e);
                }
                match state.try_update(|s| s.finish_fetch(seq, result)) {
                    Some(FetchOutcome::Refetch) => continue,
                    _ => return,
                }
            }
        });
    };

    Effect::new(move |_| {
        tabs_store.data_revision.track();
        load_page();
    });

    let go_previous = Callback::new(move |_| {
        if state.try_update(|s| s.can_go_previous() && s.page.go_previous()) == Some(true) {
            load_page();
        }
    });
    let go_next = Callback::new(move |_| {
        if state.try_update(|s| s.can_go_next() && s.page.go_next()) == Some(true) {
            load_page();
        }
    });

    let delete_row = Callback::new(move |id: String| {
        let question = format!("Are you sure you want to delete this {}?", kind.element_name());
        if !window().confirm_with_message(&question).unwrap_or(false) {
            return;
        }
        set_message.set(None);
        set_error.set(None);
        deleting.set(Some(id.clone()));
        let service = service.get_value();
        spawn_local(async move {
            let result = service.delete_at(binding, &id).await;
            deleting.try_set(None);
            match result {
                Ok(msg) => {
                    log!("🗑️ {} {} deleted", kind.name(), id);
                    state.try_update(|s| s.remove_row(&id));
                    set_message.try_set(Some(msg));
                    tabs_store.mark_data_changed();
                    gloo_timers::future::TimeoutFuture::new(MESSAGE_TIMEOUT_MS).await;
                    set_message.try_set(None);
                }
                Err(e) => {
                    log::error!("{} {} delete failed: {}", kind.name(), id, e);
                    set_error.try_set(Some(e.to_string()));
                }
            }
        });
    });

    let body = move || {
        let current = state.get();
        match current.status {
            LoadStatus::Idle | LoadStatus::Loading => view! {
                <TableRow>
                    <TableCell attr:colspan=column_count.to_string()>
                        <Flex justify=FlexJustify::Center><Spinner /></Flex>
                    </TableCell>
                </TableRow>
            }
            .into_any(),
            LoadStatus::Failed(reason) => view! {
                <TableRow>
                    <TableCell attr:colspan=column_count.to_string()>
                        <div class="alert alert--error">{reason}</div>
                    </TableCell>
                </TableRow>
            }
            .into_any(),
            LoadStatus::Loaded if current.rows.is_empty() => view! {
                <TableRow>
                    <TableCell attr:colspan=column_count.to_string()>
                        <div class="entity-table__empty">"No rows"</div>
                    </TableCell>
                </TableRow>
            }
            .into_any(),
            LoadStatus::Loaded => current
                .rows
                .into_iter()
                .map(|row| {
                    let cells = columns.with_value(|columns| {
                        columns
                            .iter()
                            .map(|column| resolve_cell(&column.kind, &row))
                            .collect::<Vec<_>>()
                    });
                    view! {
                        <TableRow>
                            {cells
                                .into_iter()
                                .map(|content| view! {
                                    <TableCell>
                                        <TableCellLayout>
                                            <EntityCell
                                                content=content
                                                on_edit=on_edit
                                                on_delete=delete_row
                                                busy_id=deleting
                                            />
                                        </TableCellLayout>
                                    </TableCell>
                                })
                                .collect_view()}
                        </TableRow>
                    }
                })
                .collect_view()
                .into_any(),
        }
    };

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                <UiBadge tone=Tone::Primary>
                    {move || state.with(|s| s.page.total().map(|t| t.to_string()).unwrap_or_default())}
                </UiBadge>
            </div>
            <div class="page__header-right">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_page()
                    disabled=Signal::derive(move || state.with(|s| s.is_loading()))
                >
                    {icon("refresh")}
                    "Refresh"
                </Button>
                {shows_create.then(|| view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| tabs_store.open_tab(create_tab, &tab_label_for_key(create_tab))
                    >
                        {icon("plus")}
                        {format!("Create {}", kind.element_name())}
                    </Button>
                })}
            </div>
        </div>

        <div class="page__content">
            {move || message.get().map(|msg| view! { <div class="alert alert--success">{msg}</div> })}
            {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {columns
                                .get_value()
                                .into_iter()
                                .map(|column| view! {
                                    <TableHeaderCell>{column.header}</TableHeaderCell>
                                })
                                .collect_view()}
                        </TableRow>
                    </TableHeader>
                    <TableBody>{body}</TableBody>
                </Table>
            </div>

            <PaginationControls
                info=Signal::derive(move || state.with(|s| s.footer()))
                can_go_previous=Signal::derive(move || state.with(|s| s.can_go_previous()))
                can_go_next=Signal::derive(move || state.with(|s| s.can_go_next()))
                on_previous=go_previous
                on_next=go_next
            />
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::RecordingService;
    use crate::shared::api::EntityService;
    use contracts::shared::entity_registry::{EntityKind, EntityRoutes};
    use contracts::shared::pagination::PageRequest;
    use futures::executor::block_on;

    #[test]
    fn test_full_row_span_covers_every_column() {
        let config = TableConfig::new("brand", "Manage Brands", "a001_brand_new")
            .selector("Logo", "logoUrl")
            .selector("Name", "name")
            .selector("Edit", "edit");
        let span = full_row_span(&config);
        assert_eq!(span, 3);

        let bare = TableConfig::new("brand", "Manage Brands", "a001_brand_new");
        assert_eq!(full_row_span(&bare), 1);
    }

    #[test]
    fn test_table_requests_use_the_resolved_routes() {
        let mut registry = EntityRegistry::with_defaults();
        let archived = EntityBinding {
            kind: EntityKind::Product,
            routes: EntityRoutes {
                list: "/product/archived",
                by_id: "/product/archived/{id}",
                create: "/product/create",
                update: "/product/update/{id}",
                delete: "/product/archived/delete/{id}",
            },
        };
        registry.register("archived-product", archived);
        let DataSource::Registered(binding) = registry.resolve("archived-product") else {
            panic!("alias did not resolve");
        };

        let service = RecordingService::default();
        block_on(service.fetch_page_at(binding, PageRequest::first(10))).unwrap();
        block_on(service.delete_at(binding, "p1")).unwrap();

        let routes: Vec<_> = service.calls.borrow().iter().map(|c| c.route).collect();
        assert_eq!(
            routes,
            vec![Some("/product/archived"), Some("/product/archived/delete/{id}")]
        );
    }
}
