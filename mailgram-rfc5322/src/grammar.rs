//! The address productions of RFC 5322 section 3 and their obsolete forms from section 4.
use mailgram::{
    nested,
    text::{self, literal, maybe, Rule},
    Later, Parser,
};
use mailgram_abnf as abnf;

use crate::Config;

/// The RFC 5322 rules needed to parse addresses.
///
/// Each field holds the parser for the production it is named after. All of them are [`Rule`]s:
/// their value is the text they matched. The rules are built once by [`Grammar::new`] and can be
/// used from any number of threads.
///
/// The top-level productions are also available through [`Entry`][crate::Entry] and
/// [`Grammar::parse`].
#[derive(Clone, Debug)]
pub struct Grammar {
    /// `obs-NO-WS-CTL = %d1-8 / %d11 / %d12 / %d14-31 / %d127`
    pub obs_no_ws_ctl: Rule,
    /// `quoted-pair = ("\" (VCHAR / WSP)) / obs-qp`
    pub quoted_pair: Rule,
    /// `obs-qp = "\" (%d0 / obs-NO-WS-CTL / LF / CR)`
    pub obs_qp: Rule,

    /// `FWS = ([*WSP CRLF] 1*WSP) / obs-FWS`
    pub fws: Rule,
    /// `obs-FWS = 1*WSP *(CRLF 1*WSP)`
    pub obs_fws: Rule,
    /// `ctext = %d33-39 / %d42-91 / %d93-126 / obs-ctext`
    pub ctext: Rule,
    /// `ccontent = ctext / quoted-pair / comment`
    pub ccontent: Rule,
    /// `comment = "(" *([FWS] ccontent) [FWS] ")"`
    ///
    /// Fails hard at the body of the first comment nested deeper than
    /// [`Config::max_comment_depth`].
    pub comment: Rule,
    /// `CFWS = (1*([FWS] comment) [FWS]) / FWS`
    pub cfws: Rule,

    /// `atext = ALPHA / DIGIT / "!" / "#" / "$" / "%" / "&" / "'" / "*" / "+" / "-" / "/" / "=" /
    /// "?" / "^" / "_" / "`" / "{" / "|" / "}" / "~"`
    pub atext: Rule,
    /// `atom = [CFWS] 1*atext [CFWS]`
    pub atom: Rule,
    /// `dot-atom-text = 1*atext *("." 1*atext)`
    pub dot_atom_text: Rule,
    /// `dot-atom = [CFWS] dot-atom-text [CFWS]`
    pub dot_atom: Rule,
    /// `specials = "(" / ")" / "<" / ">" / "[" / "]" / ":" / ";" / "@" / "\" / "," / "." / DQUOTE`
    pub specials: Rule,

    /// `qtext = %d33 / %d35-91 / %d93-126 / obs-qtext`
    pub qtext: Rule,
    /// `qcontent = qtext / quoted-pair`
    pub qcontent: Rule,
    /// `quoted-string = [CFWS] DQUOTE *([FWS] qcontent) [FWS] DQUOTE [CFWS]`
    pub quoted_string: Rule,

    /// `word = atom / quoted-string`
    pub word: Rule,
    /// `phrase = 1*word / obs-phrase`
    pub phrase: Rule,
    /// `obs-phrase = word *(word / "." / CFWS)`
    pub obs_phrase: Rule,
    /// `unstructured = (*([FWS] VCHAR) *WSP) / obs-unstruct`
    pub unstructured: Rule,
    /// `obs-unstruct = *((*LF *CR *(obs-utext *LF *CR)) / FWS)`
    pub obs_unstruct: Rule,

    /// `dtext = %d33-90 / %d94-126 / obs-dtext`
    pub dtext: Rule,
    /// `domain-literal = [CFWS] "[" *([FWS] dtext) [FWS] "]" [CFWS]`
    pub domain_literal: Rule,
    /// `local-part = dot-atom / quoted-string / obs-local-part`
    pub local_part: Rule,
    /// `obs-local-part = word *("." word)`
    pub obs_local_part: Rule,
    /// `domain = dot-atom / domain-literal / obs-domain`
    pub domain: Rule,
    /// `obs-domain = atom *("." atom)`
    pub obs_domain: Rule,
    /// `addr-spec = local-part "@" domain`
    pub addr_spec: Rule,

    /// `obs-domain-list = *(CFWS / ",") "@" domain *("," [CFWS] ["@" domain])`
    pub obs_domain_list: Rule,
    /// `obs-route = obs-domain-list ":"`
    pub obs_route: Rule,
    /// `obs-angle-addr = [CFWS] "<" obs-route addr-spec ">" [CFWS]`
    pub obs_angle_addr: Rule,
    /// `angle-addr = [CFWS] "<" addr-spec ">" [CFWS]`
    ///
    /// When [`Config::obsolete_routes`] is set, this is followed by `/ obs-angle-addr`.
    pub angle_addr: Rule,
    /// `display-name = phrase`
    pub display_name: Rule,
    /// `name-addr = [display-name] angle-addr`
    pub name_addr: Rule,
    /// `mailbox = name-addr / addr-spec`
    pub mailbox: Rule,
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Grammar {
    /// Builds all rules according to `config`.
    pub fn new(config: Config) -> Self {
        let Config {
            max_comment_depth,
            obsolete_routes,
        } = config;

        let wsp = abnf::wsp();
        let crlf = abnf::crlf();

        // 3.2.1 and 4.1: quoted characters
        let obs_no_ws_ctl = text::byte_ranges(
            "invalid obs-NO-WS-CTL",
            &[(1, 8), (11, 12), (14, 31), (127, 127)],
        );
        let obs_qp = text::seq([
            literal("\\"),
            text::alt([
                text::byte("invalid NUL", 0),
                obs_no_ws_ctl.clone(),
                abnf::lf(),
                abnf::cr(),
            ]),
        ]);
        let quoted_pair = text::alt([
            text::seq([literal("\\"), text::alt([abnf::vchar(), wsp.clone()])]),
            obs_qp.clone(),
        ])
        .label("quoted-pair");

        // 3.2.2: folding white space and comments
        let at_least_one_wsp = text::at_least(1, wsp.clone());
        let obs_fws = text::seq([
            at_least_one_wsp.clone(),
            text::many(text::seq([crlf.clone(), at_least_one_wsp.clone()])),
        ]);
        let fws = text::alt([
            text::seq([
                maybe(text::seq([text::many(wsp.clone()), crlf.clone()])),
                at_least_one_wsp,
            ]),
            obs_fws.clone(),
        ])
        .label("FWS");

        let ctext = text::alt([
            text::byte_ranges("invalid ctext", &[(33, 39), (42, 91), (93, 126)]),
            obs_no_ws_ctl.clone(),
        ]);

        let later_ccontent = Later::new("ccontent");
        // The guard covers the body only, so a `)` at the deepest level is not mistaken for a
        // further comment.
        let comment = text::seq([
            literal("("),
            nested(
                max_comment_depth.min(Config::MAX_COMMENT_DEPTH),
                "comments nested too deeply",
                text::seq([
                    text::many(text::seq([maybe(fws.clone()), later_ccontent.clone().boxed()])),
                    maybe(fws.clone()),
                    literal(")"),
                ]),
            ),
        ])
        .label("comment");
        let ccontent = text::alt([ctext.clone(), quoted_pair.clone(), comment.clone()]);
        later_ccontent.init(ccontent.clone());

        let cfws = text::alt([
            text::seq([
                text::at_least(1, text::seq([maybe(fws.clone()), comment.clone()])),
                maybe(fws.clone()),
            ]),
            fws.clone(),
        ])
        .label("CFWS");
        let around_cfws = |inner: Rule| text::wrapped(maybe(cfws.clone()), inner, maybe(cfws.clone()));

        // 3.2.3: atoms
        let atext = text::alt([
            abnf::alpha(),
            abnf::digit(),
            text::one_of("invalid atext", b"!#$%&'*+-/=?^_`{|}~"),
        ]);
        let at_least_one_atext = text::at_least(1, atext.clone());
        let atom = around_cfws(at_least_one_atext.clone()).label("atom");
        let dot_atom_text = text::seq([
            at_least_one_atext.clone(),
            text::many(text::seq([literal("."), at_least_one_atext])),
        ]);
        let dot_atom = around_cfws(dot_atom_text.clone()).label("dot-atom");
        let specials = text::alt([
            text::one_of("invalid specials", b"()<>[]:;@\\,."),
            abnf::dquote(),
        ]);

        // 3.2.4: quoted strings
        let qtext = text::alt([
            text::byte_ranges("invalid qtext", &[(33, 33), (35, 91), (93, 126)]),
            obs_no_ws_ctl.clone(),
        ]);
        let qcontent = text::alt([qtext.clone(), quoted_pair.clone()]);
        let quoted_string = around_cfws(text::wrapped(
            abnf::dquote(),
            text::seq([
                text::many(text::seq([maybe(fws.clone()), qcontent.clone()])),
                maybe(fws.clone()),
            ]),
            abnf::dquote(),
        ))
        .label("quoted-string");

        // 3.2.5 and 4.1: miscellaneous tokens
        let word = text::alt([atom.clone(), quoted_string.clone()]).label("word");
        let obs_phrase = text::seq([
            word.clone(),
            text::many(text::alt([word.clone(), literal("."), cfws.clone()])),
        ]);
        let phrase = text::alt([text::at_least(1, word.clone()), obs_phrase.clone()]).label("phrase");

        let obs_utext = text::alt([
            text::byte("invalid NUL", 0),
            obs_no_ws_ctl.clone(),
            abnf::vchar(),
        ]);
        let line_breaks = text::seq([text::many(abnf::lf()), text::many(abnf::cr())]);
        let obs_unstruct = text::many(text::alt([
            fws.clone(),
            text::seq([
                line_breaks.clone(),
                text::many(text::seq([obs_utext, line_breaks])),
            ]),
        ]));
        let unstructured = text::alt([
            text::seq([
                text::many(text::seq([maybe(fws.clone()), abnf::vchar()])),
                text::many(wsp.clone()),
            ]),
            obs_unstruct.clone(),
        ]);

        // 3.4.1 and 4.4: addr-spec
        let dtext = text::alt([
            text::byte_ranges("invalid dtext", &[(33, 90), (94, 126)]),
            obs_no_ws_ctl.clone(),
            quoted_pair.clone(),
        ]);
        let domain_literal = around_cfws(text::wrapped(
            literal("["),
            text::seq([
                text::many(text::seq([maybe(fws.clone()), dtext.clone()])),
                maybe(fws.clone()),
            ]),
            literal("]"),
        ))
        .label("domain-literal");

        let obs_local_part = text::seq([
            word.clone(),
            text::many(text::seq([literal("."), word.clone()])),
        ]);
        let local_part = text::alt([
            dot_atom.clone(),
            quoted_string.clone(),
            obs_local_part.clone(),
        ])
        .label("local-part");

        let obs_domain = text::seq([
            atom.clone(),
            text::many(text::seq([literal("."), atom.clone()])),
        ]);
        let domain = text::alt([
            dot_atom.clone(),
            domain_literal.clone(),
            obs_domain.clone(),
        ])
        .label("domain");

        let addr_spec = text::seq([local_part.clone(), literal("@"), domain.clone()])
            .label("addr-spec");

        // 3.4 and 4.4: angle-addr, name-addr and mailbox
        let obs_domain_list = text::seq([
            text::many(text::alt([cfws.clone(), literal(",")])),
            literal("@"),
            domain.clone(),
            text::many(text::seq([
                literal(","),
                maybe(cfws.clone()),
                maybe(text::seq([literal("@"), domain.clone()])),
            ])),
        ]);
        let obs_route = text::seq([obs_domain_list.clone(), literal(":")]);
        let obs_angle_addr = around_cfws(text::wrapped(
            literal("<"),
            text::seq([obs_route.clone(), addr_spec.clone()]),
            literal(">"),
        ));

        let curr_angle_addr = around_cfws(text::wrapped(
            literal("<"),
            addr_spec.clone(),
            literal(">"),
        ));
        let angle_addr = if obsolete_routes {
            text::alt([curr_angle_addr, obs_angle_addr.clone()])
        } else {
            curr_angle_addr
        };
        let angle_addr = angle_addr.label("angle-addr");

        let display_name = phrase.clone();
        let name_addr = text::seq([maybe(display_name.clone()), angle_addr.clone()])
            .label("name-addr");
        let mailbox = text::alt([name_addr.clone(), addr_spec.clone()]).label("mailbox");

        Self {
            obs_no_ws_ctl,
            quoted_pair,
            obs_qp,
            fws,
            obs_fws,
            ctext,
            ccontent,
            comment,
            cfws,
            atext,
            atom,
            dot_atom_text,
            dot_atom,
            specials,
            qtext,
            qcontent,
            quoted_string,
            word,
            phrase,
            obs_phrase,
            unstructured,
            obs_unstruct,
            dtext,
            domain_literal,
            local_part,
            obs_local_part,
            domain,
            obs_domain,
            addr_spec,
            obs_domain_list,
            obs_route,
            obs_angle_addr,
            angle_addr,
            display_name,
            name_addr,
            mailbox,
        }
    }
}
