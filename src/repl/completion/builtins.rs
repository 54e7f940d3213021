//! Argument tables for the built-in Tcl command vocabulary.
//!
//! Subcommands and options offered when completing the arguments of each
//! command. Entries may list an option twice; the registry deduplicates.

/// `(command, arguments)` pairs loaded by [`super::ArgumentRegistry::with_builtins`].
pub(crate) static BUILTIN_ARGUMENTS: &[(&str, &[&str])] = &[
    ("after", &["cancel", "idle", "info"]),
    (
        "array",
        &[
            "anymore", "donesearch", "exists", "get", "names", "nextelement", "set", "size",
            "startsearch", "statistics", "unset",
        ],
    ),
    (
        "binary",
        &[
            "decode", "encode", "format", "scan", "base64", "hex", "uuencode", "-maxlen",
            "-wrapchar", "-strict",
        ],
    ),
    (
        "chan",
        &[
            "blocked", "close", "configure", "copy", "create", "current", "end", "eof", "event",
            "flush", "gets", "names", "pending", "pipe", "pop", "postevent", "push", "puts",
            "read", "seek", "start", "tell", "truncate", "-blocking", "-buffering", "-buffersize",
            "-encoding", "-eofchar", "-nonewline", "-translation",
        ],
    ),
    (
        "clock",
        &[
            "add", "clicks", "format", "microseconds", "milliseconds", "scan", "seconds", "-base",
            "-format", "-gmt", "-locale", "-timezone",
        ],
    ),
    (
        "dict",
        &[
            "append", "create", "exists", "filter", "key", "script", "value", "for", "get",
            "incr", "info", "keys", "lappend", "map", "merge", "remove", "replace", "set", "size",
            "unset", "update", "values", "with",
        ],
    ),
    (
        "encoding",
        &["convertfrom", "convertto", "dirs", "names", "system"],
    ),
    (
        "fconfigure",
        &[
            "-blocking", "-buffering", "-buffersize", "-encoding", "-eofchar", "-translation",
        ],
    ),
    ("fcopy", &["-size", "-command"]),
    (
        "file",
        &[
            "atime", "attributes", "channels", "copy", "-force", "dirname", "executable",
            "exists", "extension", "isdirectory", "isfile", "join", "link", "lstat", "mkdir",
            "mtime", "nativename", "normalize", "owned", "pathtype", "readable", "readlink",
            "rename", "rootname", "separator", "size", "split", "stat", "system", "tail",
            "tempfile", "type", "volumes", "writable",
        ],
    ),
    ("fileevent", &["readable", "writeable"]),
    (
        "glob",
        &["-directory", "-join", "-nocomplain", "-path", "-tails", "-types"],
    ),
    (
        "history",
        &["add", "change", "clear", "event", "info", "keep", "nextid", "redo"],
    ),
    (
        "info",
        &[
            "args", "body", "class", "cmdcount", "commands", "complete", "coroutine", "default",
            "errorstack", "exists", "frame", "function", "globals", "hostname", "level",
            "library", "loaded", "locals", "nameofexecutable", "object", "patchlevel", "procs",
            "script", "sharedlibextension", "tclversion", "vars",
        ],
    ),
    (
        "interp",
        &[
            "alias", "aliases", "bgerror", "cancel", "create", "debug", "delete", "eval",
            "exists", "expose", "hide", "hidden", "invokehidden", "issafe", "limit",
            "marktrusted", "recursionlimit", "share", "slaves", "target", "transfer",
        ],
    ),
    ("load", &["-global", "-lazy"]),
    (
        "lsearch",
        &[
            "-exact", "-glob", "-regexp", "-sorted", "-all", "-inline", "-not", "-start",
            "-ascii", "-dictionary", "-integer", "-nocase", "-real", "-decreasing",
            "-increasing", "-bisect", "-index", "-subindices",
        ],
    ),
    (
        "lsort",
        &[
            "-ascii", "-dictionary", "-integer", "-real", "-command", "-increasing",
            "-decreasing", "-indices", "-index", "-stride", "-nocase", "-unique",
        ],
    ),
    (
        "namespace",
        &[
            "children", "code", "current", "delete", "ensemble", "eval", "exists", "export",
            "-clear", "forget", "import", "-force", "inscope", "origin", "parent", "path",
            "qualifiers", "tail", "upvar", "unknown", "which", "-command", "-variable",
        ],
    ),
    (
        "package",
        &[
            "forget", "ifneeded", "names", "present", "provide", "require", "unknown",
            "vcompare", "versions", "vsatisfies", "prefer",
        ],
    ),
    ("puts", &["-nonewline"]),
    ("read", &["-nonewline"]),
    (
        "regexp",
        &[
            "-about", "-expanded", "-indices", "-line", "-linestop", "-lineanchor", "-nocase",
            "-all", "-inline", "-start",
        ],
    ),
    (
        "regsub",
        &[
            "-all", "-expanded", "-line", "-linestop", "-lineanchor", "-nocase", "-start",
        ],
    ),
    (
        "return",
        &[
            "ok", "error", "return", "break", "continue", "-code", "-errorcode", "-errorinfo",
            "-errorstack", "-level", "-options",
        ],
    ),
    ("seek", &["start", "current", "end"]),
    (
        "self",
        &[
            "call", "caller", "class", "filter", "method", "namespace", "next", "object",
            "target",
        ],
    ),
    (
        "socket",
        &[
            "-async", "-connecting", "-error", "-myaddr", "-myport", "-peername", "-server",
            "-sockname",
        ],
    ),
    ("source", &["-encoding"]),
    (
        "string",
        &[
            "-failindex", "-length", "-nocase", "-strict", "alnum", "alpha", "ascii", "boolean",
            "cat", "compare", "control", "digit", "double", "entier", "equal", "false", "first",
            "graph", "index", "integer", "is", "last", "length", "list", "lower", "map",
            "match", "print", "punct", "range", "repeat", "replace", "reverse", "space",
            "tolower", "totitle", "toupper", "trim", "trimleft", "trimright", "true", "upper",
            "wideinteger", "wordchar", "xdigit",
        ],
    ),
    (
        "subst",
        &["-nobackslashes", "-nocommands", "-novariables"],
    ),
    (
        "switch",
        &["-exact", "-glob", "-regexp", "-nocase", "-matchvar", "-indexvar"],
    ),
    (
        "trace",
        &[
            "add", "array", "command", "delete", "enter", "enterstep", "execution", "info",
            "leave", "leavestep", "read", "remove", "rename", "unset", "variable", "vdelete",
            "vinfo", "write",
        ],
    ),
    ("unload", &["-nocomplain", "-keeplibrary"]),
    ("unset", &["-nocomplain"]),
    ("update", &["idletasks"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_listed_once() {
        let mut names: Vec<&str> = BUILTIN_ARGUMENTS.iter().map(|(name, _)| *name).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_no_empty_tables() {
        assert!(BUILTIN_ARGUMENTS.iter().all(|(_, args)| !args.is_empty()));
    }
}
