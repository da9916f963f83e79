//! Compiled-in text shown by the menu and the quiz.

pub const MAIN_MENU: &str = "Hello, young Padawan! \
This is testing system for Jedi Code knowledge.
Please select one of next items:
(1) See Jedi Code
(2) See information about Jedi Order
(3) Start testing
(4) Exit
";

pub const JEDI_CODE_MENU: &str = "Please select one of next items:
(1) See information about Jedi Order
(2) Back to main menu
";

pub const JEDI_ORDER_MENU: &str = "Please select one of next items:
(1) See Jedi Code
(2) Back to main menu
";

pub const JEDI_CODE: [&str; 5] = [
    "There is no emotion, there is peace.",
    "There is no ignorance, there is knowledge.",
    "There is no passion, there is serenity.",
    "There is no chaos, there is harmony.",
    "There is no death, there is the Force.",
];

pub const JEDI_ORDER: &str = "\
The Jedi Order was a noble religious order of protectors united in
their devotion to the light side of the Force. With a history dating
back thousands of years before the rise of the Galactic Empire, the
Jedi Knights - noted for their lightsabers and natural ability to
harness the powers of the Force - stood as the guardians of peace
and justice in the Galactic Republic. The Order was originally
established on Ahch-To in the Unknown Regions. In later years, the
Jedi Temple on the Core World Coruscant served as the hub of all
Jedi activity in the galaxy. The Temple was also a training school
for younglings and Padawans, who learned the ways of the Force under
the supervision of Jedi Masters, twelve of whom were elected to
serve on the Jedi High Council - the Order's highest governing
authority.";

pub const TRY_AGAIN: &str = "Try again\n";

pub const TESTING_STARTED: &str =
    "Testing started: please enter correct answer for each question";

pub const PASSED: &str = "Congratulations, young Padawan! You know Jedi Code.
May the Force be with you!";

pub const FAILED: &str = "Alas, young Padawan, you are not ready for the path yet!";

pub const TIMED_OUT: &str = "Time is up, young Padawan! A Jedi must be quicker than that.";
