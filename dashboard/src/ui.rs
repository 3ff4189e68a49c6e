//! Line-oriented terminal UI: renders the current page and maps input
//! lines to state-machine events.
//!
//! # Design
//! The UI owns no state. Every iteration of the main loop renders from the
//! single `AppState`, reads one command line, and dispatches through
//! `blog_core::app::update`. Form filling is the only multi-line
//! interaction: it walks the fields sequentially, showing the current
//! value and keeping it on empty input. All I/O goes through generic
//! `BufRead`/`Write` parameters so tests drive the UI with in-memory
//! buffers.

use std::io::{self, BufRead, Write};

use blog_core::app::{update, AppState, Event, Page};
use blog_core::form::BlogForm;
use blog_core::http::Transport;
use blog_core::BlogApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Render the current page, draining notices and errors first.
pub fn render<W: Write>(state: &mut AppState, out: &mut W) -> io::Result<()> {
    for notice in state.take_notices() {
        writeln!(out, "[ok] {notice}")?;
    }
    for error in state.take_errors() {
        writeln!(out, "[error] {error}")?;
    }
    match state.page {
        Page::List => render_list(state, out),
        Page::Create => render_create(state, out),
        Page::Edit => render_edit(state, out),
    }
}

fn render_list<W: Write>(state: &AppState, out: &mut W) -> io::Result<()> {
    writeln!(out, "== Blog List ==")?;
    if state.posts.is_empty() {
        writeln!(out, "(no blogs)")?;
    }
    for (i, post) in state.posts.iter().enumerate() {
        writeln!(
            out,
            "{:2}. {} — {} ({})",
            i + 1,
            post.title,
            post.category,
            post.date
        )?;
    }
    if let Some(id) = &state.pending_delete {
        let title = state
            .posts
            .iter()
            .find(|p| &p.id == id)
            .map(|p| p.title.as_str())
            .unwrap_or(id);
        writeln!(
            out,
            "Are you sure you want to delete \"{title}\"? (yes/no)"
        )?;
    } else {
        writeln!(out, "commands: delete <n> | refresh | create | edit | quit")?;
    }
    Ok(())
}

fn render_create<W: Write>(state: &AppState, out: &mut W) -> io::Result<()> {
    writeln!(out, "== Create Blog ==")?;
    if let Some(post) = &state.pending_create {
        writeln!(
            out,
            "Are you sure you want to submit \"{}\"? (yes/no)",
            post.title
        )?;
    } else {
        writeln!(out, "commands: fill | list | edit | quit")?;
    }
    Ok(())
}

fn render_edit<W: Write>(state: &AppState, out: &mut W) -> io::Result<()> {
    writeln!(out, "== Edit Blog ==")?;
    if state.posts.is_empty() {
        writeln!(out, "(no blogs to edit)")?;
    }
    for (i, post) in state.posts.iter().enumerate() {
        writeln!(out, "{:2}. {} [{}]", i + 1, post.title, post.id)?;
    }
    if let Some(target) = &state.edit {
        writeln!(out, "editing \"{}\" — type fill to change fields", target.form.title)?;
    }
    writeln!(out, "commands: pick <n> | fill | list | create | quit")?;
    Ok(())
}

/// Handle one command line against the current page.
pub fn dispatch<T, R, W>(
    state: &mut AppState,
    api: &mut BlogApi<T>,
    line: &str,
    input: &mut R,
    out: &mut W,
    today: &str,
) -> io::Result<Outcome>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    let cmd = line.trim();
    match cmd {
        "quit" | "q" => return Ok(Outcome::Quit),
        "list" => update(state, api, Event::Navigate(Page::List), today),
        "create" => update(state, api, Event::Navigate(Page::Create), today),
        "edit" => update(state, api, Event::Navigate(Page::Edit), today),
        "refresh" => update(state, api, Event::RefreshList, today),
        "yes" if state.page == Page::List && state.pending_delete.is_some() => {
            update(state, api, Event::ConfirmDelete, today);
        }
        "no" if state.page == Page::List && state.pending_delete.is_some() => {
            update(state, api, Event::CancelDelete, today);
        }
        "yes" if state.page == Page::Create && state.pending_create.is_some() => {
            update(state, api, Event::ConfirmCreate, today);
        }
        "no" if state.page == Page::Create && state.pending_create.is_some() => {
            update(state, api, Event::CancelCreate, today);
        }
        "fill" if state.page == Page::Create && state.pending_create.is_none() => {
            fill_form(&mut state.create_form, input, out)?;
            update(state, api, Event::SubmitCreate, today);
        }
        "fill" if state.page == Page::Edit && state.edit.is_some() => {
            if let Some(target) = &mut state.edit {
                fill_form(&mut target.form, input, out)?;
            }
            // Edit submits immediately, no confirmation step.
            update(state, api, Event::SubmitEdit, today);
        }
        _ => {
            if let Some(n) = parse_index(cmd, "delete") {
                if state.page == Page::List {
                    match state.posts.get(n - 1).map(|p| p.id.clone()) {
                        Some(id) => update(state, api, Event::DeleteRequested(id), today),
                        None => writeln!(out, "no blog number {n}")?,
                    }
                    return Ok(Outcome::Continue);
                }
            }
            if let Some(n) = parse_index(cmd, "pick") {
                if state.page == Page::Edit {
                    match state.posts.get(n - 1).map(|p| p.id.clone()) {
                        Some(id) => update(state, api, Event::SelectEditTarget(id), today),
                        None => writeln!(out, "no blog number {n}")?,
                    }
                    return Ok(Outcome::Continue);
                }
            }
            writeln!(out, "unknown command: {cmd}")?;
        }
    }
    Ok(Outcome::Continue)
}

/// Walk every form field, prompting with the current value. Empty input
/// keeps the existing value; the section-count prompt resizes the
/// sections sub-form before its fields are walked.
fn fill_form<R: BufRead, W: Write>(
    form: &mut BlogForm,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    form.title = prompt(input, out, "Title", &form.title)?;
    form.category = prompt(input, out, "Category", &form.category)?;
    form.description = prompt(input, out, "Description", &form.description)?;
    form.image = prompt(input, out, "Image URL", &form.image)?;
    form.introduction = prompt(input, out, "Introduction", &form.introduction)?;

    let current = form.section_count();
    let raw = prompt(input, out, "Number of sections", &current.to_string())?;
    let count = raw.parse::<usize>().unwrap_or(current);
    form.set_section_count(count);

    for i in 0..form.section_count() {
        let title = prompt(
            input,
            out,
            &format!("Section Title {}", i + 1),
            &form.sections[i].title,
        )?;
        let content = prompt(
            input,
            out,
            &format!("Section Content {}", i + 1),
            &form.sections[i].content,
        )?;
        form.sections[i].title = title;
        form.sections[i].content = content;
    }

    form.conclusion = prompt(input, out, "Conclusion", &form.conclusion)?;
    Ok(())
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    current: &str,
) -> io::Result<String> {
    write!(out, "{label} [{current}]: ")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let typed = line.trim_end_matches(['\n', '\r']);
    Ok(if typed.is_empty() {
        current.to_string()
    } else {
        typed.to_string()
    })
}

/// Parse commands of the form `"<verb> <n>"` with a 1-based index.
fn parse_index(cmd: &str, verb: &str) -> Option<usize> {
    let rest = cmd.strip_prefix(verb)?.trim();
    let n = rest.parse::<usize>().ok()?;
    (n > 0).then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::http::{HttpMethod, HttpRequest, HttpResponse};
    use blog_core::types::{BlogContent, BlogPost, Section};
    use blog_core::ApiError;
    use std::io::Cursor;

    const TODAY: &str = "2024-01-15";

    /// Serves a fixed set of posts and accepts every mutation.
    struct FakeBackend {
        posts: Vec<BlogPost>,
    }

    impl Transport for FakeBackend {
        fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
            let body = match (&req.method, req.path.ends_with("/blogs")) {
                (HttpMethod::Get, true) => {
                    serde_json::to_string(&serde_json::json!({ "blogs": &self.posts })).unwrap()
                }
                (HttpMethod::Get, false) => {
                    match self
                        .posts
                        .iter()
                        .find(|p| req.path.ends_with(&format!("/blogs/{}", p.id)))
                    {
                        Some(post) => serde_json::to_string(post).unwrap(),
                        None => {
                            return Ok(HttpResponse {
                                status: 404,
                                headers: Vec::new(),
                                body: String::new(),
                            })
                        }
                    }
                }
                _ => r#"{"ok":true}"#.to_string(),
            };
            Ok(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body,
            })
        }
    }

    fn post(id: &str, title: &str) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            title: title.to_string(),
            category: "Tech".to_string(),
            date: "2024-01-01".to_string(),
            image: "img".to_string(),
            description: "d".to_string(),
            content: BlogContent {
                introduction: "i".to_string(),
                sections: vec![Section {
                    title: "s".to_string(),
                    content: "c".to_string(),
                }],
                conclusion: "z".to_string(),
            },
        }
    }

    fn api(posts: Vec<BlogPost>) -> BlogApi<FakeBackend> {
        BlogApi::new("http://localhost:3000", FakeBackend { posts })
    }

    fn run(
        state: &mut AppState,
        api: &mut BlogApi<FakeBackend>,
        line: &str,
        stdin: &str,
    ) -> (Outcome, String) {
        let mut input = Cursor::new(stdin.to_string());
        let mut out = Vec::new();
        let outcome = dispatch(state, api, line, &mut input, &mut out, TODAY).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn prompt_keeps_current_value_on_empty_input() {
        let mut input = Cursor::new("\n".to_string());
        let mut out = Vec::new();
        let value = prompt(&mut input, &mut out, "Title", "Existing").unwrap();
        assert_eq!(value, "Existing");
        assert_eq!(String::from_utf8(out).unwrap(), "Title [Existing]: ");
    }

    #[test]
    fn prompt_takes_typed_value() {
        let mut input = Cursor::new("New title\n".to_string());
        let mut out = Vec::new();
        let value = prompt(&mut input, &mut out, "Title", "Existing").unwrap();
        assert_eq!(value, "New title");
    }

    #[test]
    fn fill_form_resizes_sections_and_walks_fields() {
        let mut form = BlogForm::new();
        // title, category, description, image, introduction, count=2,
        // then two title/content pairs, then conclusion.
        let script = "T\nC\nD\nI\nintro\n2\ns1\nc1\ns2\nc2\nend\n";
        let mut input = Cursor::new(script.to_string());
        let mut out = Vec::new();
        fill_form(&mut form, &mut input, &mut out).unwrap();

        assert_eq!(form.title, "T");
        assert_eq!(form.section_count(), 2);
        assert_eq!(form.sections[1].title, "s2");
        assert_eq!(form.conclusion, "end");
        assert!(form.submit(TODAY).is_ok());
    }

    #[test]
    fn fill_form_invalid_count_keeps_current() {
        let mut form = BlogForm::new();
        let script = "T\nC\nD\nI\nintro\nnot-a-number\ns1\nc1\nend\n";
        let mut input = Cursor::new(script.to_string());
        let mut out = Vec::new();
        fill_form(&mut form, &mut input, &mut out).unwrap();
        assert_eq!(form.section_count(), 1);
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut state = AppState::new();
        let mut api = api(vec![]);
        let (outcome, _) = run(&mut state, &mut api, "quit", "");
        assert_eq!(outcome, Outcome::Quit);
    }

    #[test]
    fn delete_by_index_stages_confirmation() {
        let mut state = AppState::new();
        let mut api = api(vec![post("a", "A"), post("b", "B")]);
        run(&mut state, &mut api, "refresh", "");
        run(&mut state, &mut api, "delete 2", "");
        assert_eq!(state.pending_delete.as_deref(), Some("b"));
    }

    #[test]
    fn delete_out_of_range_reports() {
        let mut state = AppState::new();
        let mut api = api(vec![post("a", "A")]);
        run(&mut state, &mut api, "refresh", "");
        let (_, out) = run(&mut state, &mut api, "delete 5", "");
        assert!(out.contains("no blog number 5"));
        assert!(state.pending_delete.is_none());
    }

    #[test]
    fn yes_on_list_page_confirms_delete() {
        let mut state = AppState::new();
        let mut api = api(vec![post("a", "A")]);
        run(&mut state, &mut api, "refresh", "");
        run(&mut state, &mut api, "delete 1", "");
        run(&mut state, &mut api, "yes", "");
        assert!(state.pending_delete.is_none());
        assert_eq!(state.take_notices(), vec!["Blog deleted successfully"]);
    }

    #[test]
    fn yes_without_pending_confirmation_is_unknown() {
        let mut state = AppState::new();
        let mut api = api(vec![]);
        let (_, out) = run(&mut state, &mut api, "yes", "");
        assert!(out.contains("unknown command"));
    }

    #[test]
    fn create_fill_and_confirm_flow() {
        let mut state = AppState::new();
        let mut api = api(vec![]);
        run(&mut state, &mut api, "create", "");
        let script = "Hello\nTech\nA post\nimg\nintro\n1\nIntro\nBody\ndone\n";
        run(&mut state, &mut api, "fill", script);
        assert!(state.pending_create.is_some());

        run(&mut state, &mut api, "yes", "");
        assert_eq!(state.page, Page::List);
        assert_eq!(state.take_notices(), vec!["Blog created successfully"]);
    }

    #[test]
    fn pick_then_fill_edits_and_submits() {
        let mut state = AppState::new();
        let mut api = api(vec![post("a", "A")]);
        run(&mut state, &mut api, "edit", "");
        run(&mut state, &mut api, "pick 1", "");
        assert!(state.edit.is_some());

        // Keep every field except the title.
        let script = "Renamed\n\n\n\n\n\n\n\n\n";
        run(&mut state, &mut api, "fill", script);
        assert_eq!(state.page, Page::List);
        assert_eq!(state.take_notices(), vec!["Blog updated successfully"]);
    }

    #[test]
    fn render_list_shows_posts_and_pending_prompt() {
        let mut state = AppState::new();
        let mut api = api(vec![post("a", "First post")]);
        run(&mut state, &mut api, "refresh", "");
        run(&mut state, &mut api, "delete 1", "");

        let mut out = Vec::new();
        render(&mut state, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("First post"));
        assert!(text.contains("Are you sure you want to delete \"First post\"?"));
    }

    #[test]
    fn render_drains_errors_once() {
        let mut state = AppState::new();
        let mut api = BlogApi::new(
            "http://localhost:3000",
            FailingTransport,
        );
        update(&mut state, &mut api, Event::RefreshList, TODAY);

        let mut out = Vec::new();
        render(&mut state, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[error] Error fetching blogs:"));

        let mut out = Vec::new();
        render(&mut state, &mut out).unwrap();
        assert!(!String::from_utf8(out).unwrap().contains("[error]"));
    }

    struct FailingTransport;

    impl Transport for FailingTransport {
        fn execute(&self, _req: HttpRequest) -> Result<HttpResponse, ApiError> {
            Err(ApiError::Transport("connection refused".to_string()))
        }
    }
}
