//! Positional argument reader shared by the command handlers.

use crate::cli::core::CommandError;

/// Consumes command arguments left to right, reporting errors with `usage`.
pub(crate) struct ArgCursor<'a> {
    args: &'a [&'a str],
    position: usize,
    usage: &'static str,
}

impl<'a> ArgCursor<'a> {
    pub(crate) fn new(args: &'a [&'a str], usage: &'static str) -> Self {
        Self {
            args,
            position: 0,
            usage,
        }
    }

    pub(crate) fn next(&mut self, name: &str) -> Result<&'a str, CommandError> {
        let value = self
            .args
            .get(self.position)
            .copied()
            .ok_or_else(|| CommandError::arguments(format!("Missing {name}"), self.usage))?;
        self.position += 1;
        Ok(value)
    }

    pub(crate) fn optional(&mut self) -> Option<&'a str> {
        let value = self.args.get(self.position).copied();
        if value.is_some() {
            self.position += 1;
        }
        value
    }

    pub(crate) fn count(&mut self, name: &str) -> Result<usize, CommandError> {
        let raw = self.next(name)?;
        raw.parse::<usize>().map_err(|_| {
            CommandError::arguments(
                format!("Invalid {name} `{raw}`: expected a whole number"),
                self.usage,
            )
        })
    }

    pub(crate) fn amount(&mut self, name: &str) -> Result<f64, CommandError> {
        let raw = self.next(name)?;
        raw.parse::<f64>().map_err(|_| {
            CommandError::arguments(format!("Invalid {name} `{raw}`: expected a number"), self.usage)
        })
    }

    /// Reads exactly `count` values named `name 1`, `name 2`, ...
    pub(crate) fn list(&mut self, name: &str, count: usize) -> Result<Vec<String>, CommandError> {
        (1..=count)
            .map(|idx| self.next(&format!("{name} {idx} of {count}")).map(str::to_string))
            .collect()
    }

    pub(crate) fn amounts(&mut self, name: &str, count: usize) -> Result<Vec<f64>, CommandError> {
        (1..=count)
            .map(|idx| self.amount(&format!("{name} {idx} of {count}")))
            .collect()
    }

    /// Fails when arguments remain unread.
    pub(crate) fn finish(self) -> Result<(), CommandError> {
        match self.args.get(self.position..) {
            Some(rest) if !rest.is_empty() => Err(CommandError::arguments(
                format!("Unexpected argument(s): {}", rest.join(" ")),
                self.usage,
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USAGE: &str = "TEST <a> <n> <x>...";

    fn message(err: CommandError) -> String {
        match err {
            CommandError::InvalidArguments { message, usage } => {
                assert_eq!(usage, USAGE);
                message
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn reads_counted_lists() {
        let args = ["g", "2", "u1", "u2", "1.5"];
        let mut cursor = ArgCursor::new(&args, USAGE);
        assert_eq!(cursor.next("group").unwrap(), "g");
        let count = cursor.count("user count").unwrap();
        assert_eq!(cursor.list("user", count).unwrap(), ["u1", "u2"]);
        assert_eq!(cursor.amount("amount").unwrap(), 1.5);
        assert!(cursor.optional().is_none());
        cursor.finish().unwrap();
    }

    #[test]
    fn short_lists_name_the_missing_slot() {
        let args = ["3", "u1"];
        let mut cursor = ArgCursor::new(&args, USAGE);
        let count = cursor.count("user count").unwrap();
        let err = cursor.list("user", count).unwrap_err();
        assert_eq!(message(err), "Missing user 2 of 3");
    }

    #[test]
    fn bad_numbers_and_leftovers_are_rejected() {
        let args = ["-1", "abc", "extra"];
        let mut cursor = ArgCursor::new(&args, USAGE);
        assert!(message(cursor.count("user count").unwrap_err()).contains("whole number"));
        assert!(message(cursor.amount("amount").unwrap_err()).contains("`abc`"));
        assert_eq!(
            message(cursor.finish().unwrap_err()),
            "Unexpected argument(s): extra"
        );
    }
}
