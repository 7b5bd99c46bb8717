// src/ports/html.rs
use crate::domain::{ListKind, ListState, Note, NoteId};
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::instrument;

/// What a button on a note card does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Archive,
    Unarchive,
    Delete,
}

/// One interactive button of one render.
///
/// Bindings die with the render that produced them; clicking one after the
/// list has re-rendered is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonBinding {
    pub generation: u64,
    pub action: ButtonAction,
    pub note_id: NoteId,
}

/// Markup of a list plus the buttons it exposes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedList {
    pub generation: u64,
    pub html: String,
    pub bindings: Vec<ButtonBinding>,
}

impl RenderedList {
    pub fn binding(&self, action: ButtonAction, note_id: &NoteId) -> Option<&ButtonBinding> {
        self.bindings
            .iter()
            .find(|b| b.action == action && &b.note_id == note_id)
    }
}

const LOADER: &str = r#"<div class="loader"></div>"#;

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render_header(&self) -> String {
        r#"<header class="header"><h1><i class='bx bxs-notepad'></i>Notes App</h1></header>"#
            .to_string()
    }

    pub fn render_form(&self, title: &str, body: &str) -> String {
        format!(
            r#"<form id="note-form">
    <input type="text" id="title" placeholder="Note title" value="{title}" required />
    <textarea id="body" placeholder="Note body" required>{body}</textarea>
    <button type="submit">Add Note</button>
</form>"#,
            title = encode_double_quoted_attribute(title),
            body = encode_text(body),
        )
    }

    /// Render a list. While loading only the loader is emitted and no buttons are bound.
    #[instrument(level = "trace", skip(self, state), fields(notes = state.notes().len()))]
    pub fn render_list(&self, kind: ListKind, state: &ListState, generation: u64) -> RenderedList {
        if state.is_loading() {
            return RenderedList {
                generation,
                html: LOADER.to_string(),
                bindings: Vec::new(),
            };
        }

        let (primary, primary_class, delete_class) = match kind {
            ListKind::Active => (ButtonAction::Archive, "archive-btn", "delete-btn"),
            ListKind::Archived => (ButtonAction::Unarchive, "unarchive-btn", "delete-archive-btn"),
        };

        let mut bindings = Vec::with_capacity(state.notes().len() * 2);
        let cards: String = state
            .notes()
            .iter()
            .map(|note| {
                bindings.push(ButtonBinding {
                    generation,
                    action: primary,
                    note_id: note.id.clone(),
                });
                bindings.push(ButtonBinding {
                    generation,
                    action: ButtonAction::Delete,
                    note_id: note.id.clone(),
                });
                self.render_card(note, primary, primary_class, delete_class)
            })
            .collect();

        let html = match kind {
            ListKind::Active => cards,
            ListKind::Archived => format!(
                r#"<h2>Archive</h2>
<div class="content-arsip">{cards}</div>"#
            ),
        };

        RenderedList {
            generation,
            html,
            bindings,
        }
    }

    fn render_card(
        &self,
        note: &Note,
        primary: ButtonAction,
        primary_class: &str,
        delete_class: &str,
    ) -> String {
        let id = encode_double_quoted_attribute(note.id.as_str());
        format!(
            r#"
<div class="content-list">
    <h3>{title}</h3>
    <p>{body}</p>
    <button class="{primary_class}" data-id="{id}">{primary_label}</button>
    <button class="{delete_class}" data-id="{id}">Delete</button>
</div>"#,
            title = encode_text(&note.title),
            body = encode_text(&note.body),
            primary_label = button_label(primary),
        )
    }

    /// Compose the whole page: header, form, active notes, archive.
    pub fn render_page(
        &self,
        form: (&str, &str),
        active: &RenderedList,
        archived: &RenderedList,
    ) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Notes App</title>
    <link href="https://unpkg.com/boxicons@2.1.4/css/boxicons.min.css" rel="stylesheet">
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            max-width: 960px;
            margin: 0 auto;
            padding: 0 1rem 2rem;
            background-color: #f5f5f5;
        }}
        .header {{
            padding: 1rem 0;
            border-bottom: 2px solid #eee;
        }}
        #note-form {{
            display: flex;
            flex-direction: column;
            gap: 0.5rem;
            margin: 1.5rem 0;
        }}
        #notes-list, .content-arsip {{
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
            gap: 1rem;
        }}
        .content-list {{
            background: white;
            border-radius: 8px;
            padding: 1rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .loader {{
            width: 32px;
            height: 32px;
            margin: 2rem auto;
            border: 4px solid #ddd;
            border-top-color: #555;
            border-radius: 50%;
        }}
    </style>
</head>
<body>
    <app-bar>{header}</app-bar>
    <note-form>{form}</note-form>
    <section id="notes-list">{active}</section>
    <section id="archived-notes">{archived}</section>
</body>
</html>"#,
            header = self.render_header(),
            form = self.render_form(form.0, form.1),
            active = active.html,
            archived = archived.html,
        )
    }
}

fn button_label(action: ButtonAction) -> &'static str {
    match action {
        ButtonAction::Archive => "Archive",
        ButtonAction::Unarchive => "Unarchive",
        ButtonAction::Delete => "Delete",
    }
}
