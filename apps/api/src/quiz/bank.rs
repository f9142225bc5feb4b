//! Static question banks, keyed by skill aliases.

pub struct BankQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub answer: usize,
}

pub struct QuestionBank {
    /// Display name stamped on every question from this bank.
    pub skill: &'static str,
    /// Lower-case lookup keys.
    pub aliases: &'static [&'static str],
    pub questions: &'static [BankQuestion],
}

const fn q(question: &'static str, options: [&'static str; 4], answer: usize) -> BankQuestion {
    BankQuestion {
        question,
        options,
        answer,
    }
}

pub static BANKS: &[QuestionBank] = &[
    QuestionBank {
        skill: "Python",
        aliases: &["python"],
        questions: &[
            q("What is the output of: print(type([]) == list)?", ["True", "False", "Error", "None"], 0),
            q("Which keyword is used to define a function?", ["function", "def", "func", "define"], 1),
            q("How do you create a dictionary?", ["[]", "()", "{}", "<>"], 2),
            q("Which keyword handles exceptions?", ["catch", "try", "except", "finally"], 2),
            q("What does \"self\" represent in classes?", ["Class itself", "Instance of class", "A static var", "Global scope"], 1),
            q("Which method is the constructor?", ["__init__", "__new__", "__start__", "__main__"], 0),
            q("Output of: bool([])?", ["True", "False", "Error", "None"], 1),
            q("Which is NOT a valid data type?", ["list", "tuple", "set", "array"], 3),
            q("What is floor division operator?", ["/", "//", "%", "**"], 1),
            q("What is a lambda function?", ["Named function", "Anonymous function", "Static method", "Class method"], 1),
            q("How to import a module?", ["include", "require", "import", "using"], 2),
            q("Which list method removes an element?", ["delete()", "remove()", "erase()", "discard()"], 1),
            q("What is the correct way to start a loop?", ["for x in y:", "for(x;y;z)", "while x < y then", "loop x:"], 0),
            q("What does range(5) produce?", ["[1,2,3,4,5]", "[0,1,2,3,4]", "[0,1,2,3,4,5]", "Error"], 1),
            q("Which PEP defines the style guide?", ["PEP 20", "PEP 440", "PEP 8", "PEP 1"], 2),
            q("What is a decorator in Python?", ["A function wrapper", "A UI element", "A class type", "A list method"], 0),
            q("How to check if key exists in dict?", ["has_key()", "in keyword", "exists()", "find()"], 1),
            q("What is list comprehension?", ["List reading", "Concise way to create lists", "List sorting", "List deletion"], 1),
        ],
    },
    QuestionBank {
        skill: "JavaScript",
        aliases: &["javascript", "js"],
        questions: &[
            q("Output of \"typeof null\"?", ["null", "undefined", "object", "boolean"], 2),
            q("Strict equality operator?", ["==", "===", "=", "!="], 1),
            q("Parse JSON script?", ["JSON.parse()", "JSON.stringify()", "JSON.into()", "JSON.object()"], 0),
            q("Keyword for ES6 variables?", ["var", "let", "val", "set"], 1),
            q("What is DOM?", ["Document Object Model", "Data Object Manager", "Digital Output", "None"], 0),
        ],
    },
    QuestionBank {
        skill: "Java",
        aliases: &["java"],
        questions: &[
            q("Correct main method signature?", ["public void main()", "public static void main(String[] args)", "static void main()", "void main()"], 1),
            q("Keyword for class inheritance?", ["inherits", "extends", "implements", "using"], 1),
            q("Compilation result of Java code?", [".exe", ".class", ".java", ".bin"], 1),
            q("Used to handle exceptions?", ["if-else", "try-catch", "throw-only", "error-log"], 1),
            q("Collection with no duplicates?", ["List", "Set", "Map", "Stack"], 1),
            q("Final keyword on variable?", ["Constant", "Static", "Global", "Deleted"], 0),
            q("Root class of Java hierarchy?", ["Object", "System", "Base", "Root"], 0),
            q("Keyword for interface usage?", ["extends", "implements", "uses", "applies"], 1),
            q("Size of int type?", ["16-bit", "32-bit", "64-bit", "8-bit"], 1),
            q("JVM stands for?", ["Java Visual Model", "Java Virtual Machine", "Joint Variable Map", "None"], 1),
            q("Access modifier for same package?", ["public", "private", "protected", "default"], 3),
            q("What is a constructor?", ["Frees memory", "Initializes an object", "Creates a thread", "Defines a class"], 1),
        ],
    },
    QuestionBank {
        skill: "Rust",
        aliases: &["rust"],
        questions: &[
            q("Rust key differentiator?", ["Speed", "Memory safety without GC", "Syntax", "UI"], 1),
            q("Package manager?", ["npm", "cargo", "pip", "gem"], 1),
            q("Borrow Checker purpose?", ["Check grammar", "Enforce ownership/references", "Speed up code", "Sorting"], 1),
        ],
    },
    QuestionBank {
        skill: "Go",
        aliases: &["go", "golang"],
        questions: &[
            q("Who created Go?", ["Microsoft", "Google", "Facebook", "IBM"], 1),
            q("How to handle concurrency?", ["Threads", "Goroutines & Channels", "Async/Await", "Callbacks"], 1),
            q("Keyword to start goroutine?", ["start", "run", "go", "async"], 2),
        ],
    },
    QuestionBank {
        skill: "SQL",
        aliases: &["sql"],
        questions: &[
            q("Retrieve data command?", ["GET", "SELECT", "EXTRACT", "QUERY"], 1),
            q("Command to remove table?", ["DELETE", "REMOVE", "DROP", "TRUNCATE"], 2),
            q("Unique ID constraint?", ["Foreign Key", "Primary Key", "Index", "Unique"], 1),
            q("Modify data command?", ["MODIFY", "CHANGE", "UPDATE", "ALTER"], 2),
        ],
    },
    QuestionBank {
        skill: "C++",
        aliases: &["c++", "cpp"],
        questions: &[
            q("Who developed C++?", ["Dennis Ritchie", "Bjarne Stroustrup", "Gosling", "Guido"], 1),
            q("Used for dynamic memory?", ["malloc", "new", "create", "alloc"], 1),
            q("Operator for pointer members?", [".", "->", "::", "*"], 1),
            q("Virtual function purpose?", ["Speed", "Runtime Polymorphism", "Memory saving", "Security"], 1),
            q("Default access in class?", ["public", "private", "protected", "package"], 1),
        ],
    },
    QuestionBank {
        skill: "DevOps",
        aliases: &["devops", "docker"],
        questions: &[
            q("What is CI?", ["Code Internal", "Continuous Integration", "Computing Interface", "None"], 1),
            q("Container engine popular?", ["Xen", "Docker", "VirtualBox", "Wine"], 1),
            q("Tool for CI/CD?", ["Excel", "Jenkins", "Word", "Chrome"], 1),
        ],
    },
];

/// Generic templates; `{skill}` is replaced with the requested skill.
pub static GENERIC_TEMPLATES: &[BankQuestion] = &[
    q("What is the fundamental goal of {skill}?", ["Problem solving", "Data entry", "Typing speed", "Entertainment"], 0),
    q("Which is a core concept in {skill}?", ["Logic", "Art", "Sports", "None"], 0),
    q("Correct approach to {skill}?", ["Structured logic", "Random choice", "Guesswork", "Speed only"], 0),
    q("Best way to learn {skill}?", ["Reading only", "Practice & Projects", "Videos only", "Watching others"], 1),
    q("Used in {skill} for organization?", ["Folders", "Algorithms", "Notes", "Themes"], 1),
    q("What is documentation in {skill}?", ["User guide", "Artist notes", "Code comments", "Legal papers"], 2),
    q("Initial step in {skill} project?", ["Coding", "Planning", "Testing", "Deployment"], 1),
    q("Important factor for {skill} scalability?", ["Colors", "Design patterns", "Screen size", "Keyboard"], 1),
    q("What is optimization in {skill}?", ["Making it pretty", "Improving performance", "Adding features", "Reducing code"], 1),
    q("Version control in {skill} is for?", ["Privacy", "Tracking changes", "Speed", "Formatting"], 1),
];

/// Finds the bank for a skill name, ignoring case and surrounding whitespace.
pub fn find_bank(skill: &str) -> Option<&'static QuestionBank> {
    let key = skill.trim().to_lowercase();
    BANKS
        .iter()
        .find(|bank| bank.aliases.iter().any(|alias| *alias == key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_resolve() {
        assert_eq!(find_bank("JS").map(|b| b.skill), Some("JavaScript"));
        assert_eq!(find_bank("  cpp ").map(|b| b.skill), Some("C++"));
        assert_eq!(find_bank("docker").map(|b| b.skill), Some("DevOps"));
        assert!(find_bank("cobol").is_none());
    }

    #[test]
    fn test_answers_index_options() {
        for question in BANKS.iter().flat_map(|b| b.questions).chain(GENERIC_TEMPLATES) {
            assert!(question.answer < question.options.len(), "{}", question.question);
        }
    }
}
