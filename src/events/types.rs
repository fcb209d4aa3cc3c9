// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/events/types.rs
//!
//! Event taxonomy used by the engine's input system
//!
//! An event handle is identified by four values:
//! - `EventType`: what produced the event (mouse, keyboard, window)
//! - `EventCode`: which key or button, `none` when not applicable
//! - `EventModifier`: which modifier was held, `none` when not applicable
//! - `EventState`: what happened (click, up, down, ...)
//!
//! The order of each `ALL` array is significant: generated declarations
//! follow it, so changing it reorders the generated source file.

use std::fmt;

/// Declares a taxonomy enum together with its ordered `ALL` table and the
/// identifier each variant has in the engine's C++ enums.
macro_rules! taxonomy {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $ident:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub enum $name {
            $(
                #[doc = concat!("`", $ident, "`")]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in generation order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Identifier of this value in the generated code.
            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $ident,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

taxonomy! {
    /// Source of an input event
    EventType {
        Mouse => "mouse",
        Keyboard => "keyboard",
        Window => "window",
    }
}

taxonomy! {
    /// Key or button identifier
    ///
    /// `None` is the sentinel for events that carry no code (mouse and
    /// window events).
    EventCode {
        None => "none",
        N0 => "n0", N1 => "n1", N2 => "n2", N3 => "n3", N4 => "n4",
        N5 => "n5", N6 => "n6", N7 => "n7", N8 => "n8", N9 => "n9",
        Num0 => "num0", Num1 => "num1", Num2 => "num2", Num3 => "num3", Num4 => "num4",
        Num5 => "num5", Num6 => "num6", Num7 => "num7", Num8 => "num8", Num9 => "num9",
        A => "a", B => "b", C => "c", D => "d", E => "e", F => "f", G => "g",
        H => "h", I => "i", J => "j", K => "k", L => "l", M => "m", N => "n",
        O => "o", P => "p", Q => "q", R => "r", S => "s", T => "t", U => "u",
        V => "v", W => "w", X => "x", Y => "y", Z => "z",
        F1 => "f1", F2 => "f2", F3 => "f3", F4 => "f4", F5 => "f5",
        F6 => "f6", F7 => "f7", F8 => "f8", F9 => "f9", F10 => "f10",
        F11 => "f11", F12 => "f12", F13 => "f13", F14 => "f14", F15 => "f15",
        F16 => "f16", F17 => "f17", F18 => "f18", F19 => "f19",
        Tab => "tab",
        Space => "space",
        BackSpace => "back_space",
        CapsLock => "caps_lock",
        Page => "page",
        Enter => "enter",
        Del => "del",
        Arrow => "arrow",
        Home => "home",
        End => "end",
        Insert => "insert",
        Esc => "esc",
        Fn => "fn",
    }
}

taxonomy! {
    /// Modifier held while the event happened
    ///
    /// Mouse buttons count as modifiers so that drags can be told apart.
    EventModifier {
        None => "none",
        LeftMouse => "left_mouse",
        MiddleMouse => "middle_mouse",
        RightMouse => "right_mouse",
        LeftShift => "left_shift",
        LeftControl => "left_control",
        LeftCommand => "left_command",
        LeftOption => "left_option",
        RightShift => "right_shift",
        RightControl => "right_control",
        RightCommand => "right_command",
        RightOption => "right_option",
    }
}

taxonomy! {
    /// What happened to the event source
    EventState {
        Click => "click",
        Up => "up",
        Down => "down",
        Move => "move",
        Drag => "drag",
        Resize => "resize",
        Focus => "focus",
    }
}

impl EventCode {
    /// True for the `none` sentinel.
    pub const fn is_none(self) -> bool {
        matches!(self, EventCode::None)
    }
}

impl EventModifier {
    /// True for the `none` sentinel.
    pub const fn is_none(self) -> bool {
        matches!(self, EventModifier::None)
    }
}
