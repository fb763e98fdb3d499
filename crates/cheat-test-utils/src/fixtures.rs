//! Miniature cheat sheets in the style of learnxinyminutes-docs.
//!
//! Each fixture follows the heading convention of the built-in language of
//! the same name. Expected block names and contents are asserted by the
//! tests of the crates that use them.

/// Lua sheet with comment examples before the first heading and three
/// sections, the first one aliased to `Flow_control`.
pub const LUA: &str = r#"---
language: Lua
filename: learnlua.lua
---

Lua is a lightweight scripting language.

```lua
-- Two dashes start a one-line comment.

--[[
     Adding two ['s and ]'s makes it a
     multi-line comment.
--]]

----------------------------------------------------
-- 1. Variables and flow control.
----------------------------------------------------

num = 42

if num > 40 then
  print('over 40')
end

----------------------------------------------------
-- 2. Functions.
----------------------------------------------------

function fib(n)
  if n < 2 then return 1 end
  return fib(n - 2) + fib(n - 1)
end

----------------------------------------------------
-- 3. Tables.
----------------------------------------------------

t = {key1 = 'value1'}
```
"#;

/// Python sheet with two numbered sections.
pub const PYTHON: &str = r#"---
language: Python
filename: learnpython.py
---

```python
# Single line comments start with a number symbol.

####################################################
## 1. Primitive Datatypes and Operators
####################################################

3  # => 3
1 + 1  # => 2

####################################################
## 2. Variables and Collections
####################################################

li = []
li.append(1)
```
"#;

/// PHP sheet with banner-comment sections.
pub const PHP: &str = r#"---
language: PHP
filename: learnphp.php
---

```php
<?php // PHP code must be enclosed with <?php tags

/********************************
 * Types
 */

$boolean = true;

/********************************
 * Arrays & Lists
 */

$associative = ['One' => 1];
```
"#;

/// Perl sheet whose headings are bare `####` lines.
pub const PERL: &str = r#"---
language: Perl
filename: learnperl.pl
---

```perl
# Single line comments start with a number sign.

#### Perl variable types

#  Variables begin with a sigil.

my $animal = "camel";

#### Conditional and looping constructs

if ($var) {
  print "yes";
}
```
"#;

/// Two-section Lua document with no surrounding prose.
pub const LUA_INTRO_ADVANCED: &str = "```
--------
-- 1. Intro
--------
hello
world
--------
-- 2. Advanced
--------
deep stuff
```
";

/// Fixture for a built-in language prefix.
pub fn fixture(prefix: &str) -> Option<&'static str> {
    match prefix {
        "lua" => Some(LUA),
        "python" => Some(PYTHON),
        "php" => Some(PHP),
        "perl" => Some(PERL),
        _ => None,
    }
}

/// Built-in prefixes paired with their conventional file names.
pub const BUILTIN_FILES: [(&str, &str); 4] = [
    ("lua", "lua.html.markdown"),
    ("python", "python.html.markdown"),
    ("php", "php.html.markdown"),
    ("perl", "perl.html.markdown"),
];
