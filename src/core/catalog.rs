use crate::config::Settings;
use crate::core::Program;
use crate::domain::model::{Lesson, LessonKind};
use crate::utils::error::{LessonError, Result};
use chrono::NaiveDate;

const COMPILE_NOTES: &str = "\
Compile a source file with `g++ <file>.cpp`. With no output name the
compiler writes an executable called a.out next to the source; run it with
./a.out. Passing `-o notes` names the artifact `notes` instead, run with
./notes.
";

const COMMENTS_NOTES: &str = "\
Comments are notes left in the code for yourself and for other people
working on it. Code you wrote a few hours ago can already be hard to
follow. Line comments start with // and run to the end of the line; block
comments open with /* and close with */ and may span several lines.
";

const CHAINING_NOTES: &str = "\
Text in quotes is printed literally; a name without quotes prints the value
stored under it. Several output statements can be written one after the
other, or chained into a single statement with repeated << operators. Both
forms print the same line.
";

const INPUT_NOTES: &str = "\
Besides assignment, a variable can take its value from the user. cout is
the output stream and cin the input stream; `cin >> tip` reads what the
user types into tip. Chaining the read value back into an output line
prints: You paid [tip] dollars.
";

fn october_2024() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 1).expect("2024-10-01 is a valid date")
}

/// Every lesson in the log, ordered by id.
pub fn catalog() -> Vec<Lesson> {
    let recorded = october_2024();
    vec![
        Lesson {
            id: 2,
            slug: "compile-run",
            title: "Compile and run",
            recorded,
            kind: LessonKind::CompileAndRun,
            notes: COMPILE_NOTES,
        },
        Lesson {
            id: 3,
            slug: "comments",
            title: "Writing comments",
            recorded,
            kind: LessonKind::Comments,
            notes: COMMENTS_NOTES,
        },
        Lesson {
            id: 8,
            slug: "chaining",
            title: "Print a resulting variable",
            recorded,
            kind: LessonKind::Chaining,
            notes: CHAINING_NOTES,
        },
        Lesson {
            id: 9,
            slug: "user-input",
            title: "User input",
            recorded,
            kind: LessonKind::UserInput,
            notes: INPUT_NOTES,
        },
    ]
}

/// Looks a lesson up by numeric id (`9`, `09`) or by slug.
pub fn find(query: &str) -> Result<Lesson> {
    let query = query.trim();
    let by_id = query.parse::<u8>().ok();

    catalog()
        .into_iter()
        .find(|lesson| match by_id {
            Some(id) => lesson.id == id,
            None => lesson.slug.eq_ignore_ascii_case(query),
        })
        .ok_or_else(|| LessonError::UnknownLessonError {
            query: query.to_string(),
        })
}

impl Lesson {
    /// The runnable program for this lesson, if it has one.
    pub fn program(&self, settings: &Settings) -> Option<Box<dyn Program>> {
        match self.kind {
            LessonKind::CompileAndRun => Some(Box::new(settings.greeting_program())),
            LessonKind::Comments => None,
            LessonKind::Chaining => Some(Box::new(settings.labeled_value_program())),
            LessonKind::UserInput => Some(Box::new(settings.echo_program())),
        }
    }
}
