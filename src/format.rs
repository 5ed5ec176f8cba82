/*!

The shareable URL format.

Every URL produced by this crate has the same shape, and it can never change:
links get committed to history and posted publicly, and each of them has to keep
decoding forever.

```text
<scheme>://<host>/<path>#<title-segment>/<payload-segment>
```

Everything before the `#` is the decoder page, and is up to whoever deploys one.
The fragment is never sent to a server, so the decoder page can be entirely
static.

# Title Segment

The title is cut to its first 50 characters, then percent-encoded. Only
`A-Z a-z 0-9 - _ . ! ~ * ' ( )` pass through unescaped, which in particular
means the title segment can never contain a raw `/`.

Decoders split the fragment on the *first* `/`. The title segment is
percent-decoded if possible; if it holds a malformed escape or doesn't decode to
UTF-8, it's shown as-is. A bad title never stops the document from loading.

# Payload Segment

The payload is the document compressed and then base64url-encoded:

1. The document's UTF-8 bytes are compressed into a zlib stream: a 2-byte header
   (`0x78 0x9C` at the default level), raw DEFLATE blocks, and a 4-byte
   Adler-32 trailer.
2. The stream is encoded as base64 using the URL-safe alphabet, where `-`
   replaces `+` and `_` replaces `/`.
3. All `=` padding is removed.

```text
payload-segment = 1*( ALPHA / DIGIT / "-" / "_" )
```

A decoder restores the padding (or accepts its absence), base64-decodes, inflates
the zlib stream, and validates the result as UTF-8. Any character outside the
alphabet, including any `/` past the first, fails the decode.

| Step       | Example                          |
| --         | --                               |
| Document   | `<h1>Hi</h1>`                    |
| Raw size   | 11 bytes                         |
| zlib       | `78 9c b3 c9 30 b4 f3 c8 ...`    |
| Fragment   | `T/eJyzyTC088i00QdSABKGAwc`      |

# Size Limits

| Limit         | Applies to        | Value        | Crossing it                          |
| --            | --                | --           | --                                   |
| Hard ceiling  | Raw document      | 32,768 bytes | Encoding fails, no URL produced      |
| Soft ceiling  | Compressed stream | 4,000 bytes  | URL produced, with an advisory       |

The soft ceiling is the practical length at which social sharing surfaces start
truncating links. Decoders accept up to 1 MiB of inflated output so that
documents made by other encoders still load, while a crafted stream can't
exhaust memory.

# Commit Messages

Posts can also be published through commit messages, which carry the payload
segment verbatim:

```text
[itty:<payload-segment>] Title: <text> | Desc: <text>
```

The marker may appear anywhere in the message; if there are several, the first
well-formed one is used. `Title:` and `Desc:` values run
until the next `|` or the end of the line. A missing title becomes `Untitled`,
and a missing description is left empty. Messages whose marker is missing,
empty, unterminated, or holds invalid transport text are not posts.

*/
