use std::io::{self, Write};

use async_trait::async_trait;
use tokio::io::AsyncBufRead;
use tokio::time;

use super::Console;
use crate::core::content;
use crate::core::navigator::{Screen, View};

#[async_trait]
impl<R, W> Screen for Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    async fn show(&mut self, view: View) -> io::Result<()> {
        match view {
            View::MainMenu => self.say(content::MAIN_MENU),
            View::JediCode => {
                for line in content::JEDI_CODE {
                    self.say(line)?;
                    time::sleep(self.pacing()).await;
                }
                self.say("")?;
                self.clear()?;
                self.say(content::JEDI_CODE_MENU)
            }
            View::JediOrder => {
                self.say(content::JEDI_ORDER)?;
                self.say("")?;
                self.say(content::JEDI_ORDER_MENU)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::scripted_console;

    #[tokio::test]
    async fn test_jedi_code_lines_then_clear_then_submenu() {
        let mut console = scripted_console(b"");
        console.show(View::JediCode).await.unwrap();
        let out = String::from_utf8(console.into_writer()).unwrap();

        let last_line = out.find("There is no death, there is the Force.").unwrap();
        let clear = out.find("\x1b[2J").unwrap();
        let submenu = out.find("(2) Back to main menu").unwrap();
        assert!(last_line < clear && clear < submenu);
        assert_eq!(out.matches("\x1b[2J").count(), 1);

        let mut pos = 0;
        for line in content::JEDI_CODE {
            let found = out[pos..].find(line).unwrap();
            pos += found + line.len();
        }
    }

    #[tokio::test]
    async fn test_jedi_order_has_text_and_submenu() {
        let mut console = scripted_console(b"");
        console.show(View::JediOrder).await.unwrap();
        let out = String::from_utf8(console.into_writer()).unwrap();
        assert!(out.starts_with("The Jedi Order was"));
        assert!(out.ends_with("(1) See Jedi Code\n(2) Back to main menu\n\n"));
        assert!(!out.contains("\x1b["));
    }

    #[tokio::test]
    async fn test_main_menu_lists_four_choices() {
        let mut console = scripted_console(b"");
        console.show(View::MainMenu).await.unwrap();
        let out = String::from_utf8(console.into_writer()).unwrap();
        for item in ["(1) See Jedi Code", "(2) See information", "(3) Start testing", "(4) Exit"] {
            assert!(out.contains(item), "missing {item}");
        }
    }
}
