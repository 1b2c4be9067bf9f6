use bzrwrapper::bzr::parser::SEPARATOR;

pub const VERSION_INFO: &str = "\
date: Wed Aug 22 11:22:03 +0200 2007
revno: 6
branch-nick: rubzr
revision-id: rp@dwarf-20070822092203-xzink973ch9e5d07
";

pub const FORWARD_LOG_ARGS: &str = "log --forward -r1..-1";

/// Builds a log entry the way `bzr log` prints it.
pub fn entry(revno: u32, timestamp: &str, message: &str) -> String {
    format!(
        "{}\nrevno: {}\ncommitter: rene paulokat <rp@dwarf>\nbranch nick: rubzr\ntimestamp: {}\nmessage:\n  {}\n",
        SEPARATOR, revno, timestamp, message
    )
}

/// Five commits, oldest first.
pub fn forward_log() -> String {
    [
        entry(1, "Tue 2007-08-21 16:57:22 +0200", "added Info"),
        entry(2, "Tue 2007-08-21 16:58:29 +0200", "log-parsing..."),
        format!(
            "{}\nrevno: 3\ncommitter: rene paulokat <rp@dwarf>\nbranch nick: rubzr\ntimestamp: Tue 2007-08-21 21:05:42 +0200\nmerged: rp@dwarf-20070821190311-xyz\nmessage:\n  merged feature work\n  which spans two lines\n",
            SEPARATOR
        ),
        entry(4, "Wed 2007-08-22 10:01:00 +0200", "docs"),
        entry(5, "Wed 2007-08-22 11:22:03 +0200", "release"),
    ]
    .concat()
}

pub fn lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}
