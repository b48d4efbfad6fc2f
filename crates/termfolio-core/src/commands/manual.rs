//! Static manual pages. Also the source of the command vocabulary.

/// One manual page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManualEntry {
    pub name: &'static str,
    pub synopsis: &'static str,
    /// One-line summary, shown by `help`
    pub summary: &'static str,
    pub description: &'static str,
}

const fn page(
    name: &'static str,
    synopsis: &'static str,
    summary: &'static str,
    description: &'static str,
) -> ManualEntry {
    ManualEntry {
        name,
        synopsis,
        summary,
        description,
    }
}

/// Every recognized verb, in the order `help` lists them.
pub const MANUAL: &[ManualEntry] = &[
    page("clear", "clear", "clear the terminal", "Erase the command and output history."),
    page(
        "home",
        "home",
        "go to the home section",
        "Show the landing page. Opens home.sh in the editor while the shell is visible.",
    ),
    page(
        "about",
        "about",
        "who I am",
        "Show the about section. Opens about.md in the editor while the shell is visible.",
    ),
    page(
        "skills",
        "skills",
        "what I work with",
        "Show the skills section. Opens skills.json in the editor while the shell is visible.",
    ),
    page(
        "projects",
        "projects",
        "things I've built",
        "Show the projects section. Opens projects.js in the editor while the shell is visible.",
    ),
    page(
        "contact",
        "contact",
        "get in touch",
        "Show the contact section. Opens contact.html in the editor while the shell is visible.",
    ),
    page(
        "files",
        "files",
        "browse documents",
        "Show the files section. Opens files.txt in the editor while the shell is visible.",
    ),
    page(
        "blog",
        "blog",
        "read the blog",
        "Show the blog section. Opens blog.txt in the editor while the shell is visible.",
    ),
    page(
        "edit",
        "edit <file>",
        "open a section file",
        "Open a section file (home.sh, about.md, skills.json, projects.js, contact.html, \
         files.txt, blog.txt) in the editor overlay.",
    ),
    page("nano", "nano <file>", "open a section file", "Alias of edit."),
    page("vim", "vim <file>", "open a section file", "Alias of edit."),
    page("help", "help", "list available commands", "Print every command with a one-line summary."),
    page("social", "social", "social links", "Print links to social profiles."),
    page("whoami", "whoami", "print the profile card", "Print a short profile of the site owner."),
    page("date", "date", "print the current date", "Print the current local date and time."),
    page(
        "history",
        "history",
        "list previous commands",
        "Print every command of this session, numbered from 1.",
    ),
    page(
        "pwd",
        "pwd",
        "print working directory",
        "Print the absolute path of the working directory.",
    ),
    page(
        "ls",
        "ls [path]",
        "list directory contents",
        "List the direct children of a directory, the working directory by default. The root \
         also lists the section files.",
    ),
    page(
        "cd",
        "cd [path|..|/]",
        "change directory",
        "Change the working directory. '..' moves to the parent, '/' or no argument to the root.",
    ),
    page(
        "cat",
        "cat <file>",
        "print file contents",
        "Print a file of the virtual filesystem. Section files are opened with edit instead.",
    ),
    page("echo", "echo <text...>", "print text", "Print the rest of the line exactly as typed."),
    page(
        "man",
        "man <command>",
        "show a manual page",
        "Show the name, synopsis and description of a command.",
    ),
    page("coffee", "coffee", "take a break", "Brew a virtual cup of coffee."),
    page("joke", "joke", "tell a joke", "Print a random programming joke."),
    page(
        "launch_portfolio",
        "launch_portfolio",
        "take the tour",
        "Visit every section in turn, one every few seconds, then stop.",
    ),
    page(
        "3d_portfolio",
        "3d_portfolio",
        "open the 3D portfolio",
        "Print a link to the 3D version of the portfolio.",
    ),
    page("exit", "exit", "try to leave", "There is no leaving."),
];

/// Look up a manual page (case-insensitive).
pub fn lookup(name: &str) -> Option<&'static ManualEntry> {
    MANUAL.iter().find(|m| m.name.eq_ignore_ascii_case(name))
}
