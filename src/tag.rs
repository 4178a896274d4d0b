//! Allowed HTML element names.
//!
//! The element vocabulary is a fixed enumeration, so unknown tag names are
//! unrepresentable rather than rejected at runtime. `body` is intentionally
//! absent (one per document, never part of a fragment).

use std::fmt;

/// Invokes a callback macro with the full `method => Variant` tag list.
///
/// Single source of truth for the vocabulary: `define_tag!` below derives the
/// enum from it, and the builder derives its chainable element methods from
/// the same list.
///
/// Order of elements defined by:
/// <https://developer.mozilla.org/en-US/docs/Web/HTML/Element>
macro_rules! for_each_tag {
    ($callback:ident) => {
        $callback! {
            // content sectioning
            address => Address,
            article => Article,
            footer => Footer,
            header => Header,
            h1 => H1,
            h2 => H2,
            h3 => H3,
            h4 => H4,
            h5 => H5,
            h6 => H6,
            hgroup => Hgroup,
            nav => Nav,
            section => Section,
            // text content
            dd => Dd,
            div => Div,
            dl => Dl,
            dt => Dt,
            figcaption => Figcaption,
            figure => Figure,
            hr => Hr,
            li => Li,
            main => Main,
            ol => Ol,
            p => P,
            pre => Pre,
            ul => Ul,
            // inline text semantics
            a => A,
            abbr => Abbr,
            b => B,
            bdi => Bdi,
            bdo => Bdo,
            br => Br,
            cite => Cite,
            code => Code,
            data => Data,
            dfn => Dfn,
            em => Em,
            i => I,
            kbd => Kbd,
            mark => Mark,
            q => Q,
            rp => Rp,
            rt => Rt,
            rtc => Rtc,
            ruby => Ruby,
            s => S,
            samp => Samp,
            small => Small,
            span => Span,
            strong => Strong,
            sub => Sub,
            sup => Sup,
            time => Time,
            u => U,
            var => Var,
            wbr => Wbr,
            // image and multimedia
            area => Area,
            audio => Audio,
            img => Img,
            map => Map,
            track => Track,
            video => Video,
            // embedded content
            embed => Embed,
            iframe => Iframe,
            object => Object,
            param => Param,
            source => Source,
            // scripting
            canvas => Canvas,
            noscript => Noscript,
            script => Script,
            // edits
            del => Del,
            ins => Ins,
            // table content
            caption => Caption,
            col => Col,
            colgroup => Colgroup,
            table => Table,
            tbody => Tbody,
            td => Td,
            tfoot => Tfoot,
            th => Th,
            thead => Thead,
            tr => Tr,
            // forms
            button => Button,
            datalist => Datalist,
            fieldset => Fieldset,
            form => Form,
            input => Input,
            keygen => Keygen,
            label => Label,
            legend => Legend,
            meter => Meter,
            optgroup => Optgroup,
            option => Option,
            output => Output,
            progress => Progress,
            select => Select,
            textarea => Textarea,
            // interactive elements
            details => Details,
            dialog => Dialog,
            menu => Menu,
            menuitem => Menuitem,
            summary => Summary,
        }
    };
}

pub(crate) use for_each_tag;

macro_rules! define_tag {
    ($($method:ident => $variant:ident),+ $(,)?) => {
        /// An allowed HTML element name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Tag {
            $($variant,)+
        }

        impl Tag {
            /// Every allowed element, in declaration order.
            pub const ALL: &'static [Tag] = &[$(Tag::$variant,)+];

            /// Lowercase element name as it appears in markup.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Tag::$variant => stringify!($method),)+
                }
            }
        }
    };
}

for_each_tag!(define_tag);

impl Tag {
    /// Void elements: serialized without a closing tag.
    pub const VOID: &'static [Tag] = &[
        Tag::Area,
        Tag::Br,
        Tag::Col,
        Tag::Embed,
        Tag::Hr,
        Tag::Img,
        Tag::Input,
        Tag::Keygen,
        Tag::Menuitem,
        Tag::Param,
        Tag::Source,
        Tag::Track,
        Tag::Wbr,
    ];

    /// Looks up a tag by its lowercase element name.
    pub fn from_name(name: &str) -> Option<Tag> {
        Self::ALL.iter().copied().find(|tag| tag.as_str() == name)
    }

    pub fn is_void(&self) -> bool {
        Self::VOID.contains(self)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
