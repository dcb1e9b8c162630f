//! Verified proto sources shared by tests
//!
//! Each sample is exercised by the parser's own tests, so a change in the language shows up
//! here first.

/// Two screens and a button linking them
pub const HOME_AND_SETTINGS: &str = "screen Home:
  # Welcome
  @[Go](Settings)
screen Settings:
  > Settings page
";

/// One of every element, a component, overlays and a styles block
pub const KITCHEN_SINK: &str = r#"styles:
  --primary: #3366ff

screen Home (default):
  # Welcome
  > Paragraph text
  *> Muted text
  "> Quoted text
  @[Go](Settings)
  @_+[Save]{check}(save())
  #[Docs](https://x.dev)
  ![Logo](logo.png)
  ___:Email{you@mail.com}
  ___:Role[Admin|User]
  [X] Remember me
  (X) Monthly
  ( ) Yearly
  - item
  ---
  $Card: Hello|World
  $Card:
    - One | First
    - Two | Second
  row-gap4-p2-center:
    > child
  nav:
    - Home {home} (Home)
    - Menu {menu} (Menu)
  (+){plus}(Compose)

screen Settings:
  @[Back](-1)
  @[Confirm](Confirm)

component Card:
  # %title
  > %body

modal Confirm:
  # Are you sure?
  @~[Close](toggleConfirm)

drawer Menu:
  - Profile
  - Logout
"#;

/// Two independent syntax errors on unrelated lines
pub const TWO_ERRORS: &str = "screen Home:
  # Fine
  stray words
  > Still fine
screen Other:
  [a] b
  > Also fine
";
