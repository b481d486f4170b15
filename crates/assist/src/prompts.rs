//! Prompt templates. Placeholders in braces are filled by the client.

pub(crate) const SUMMARIZE: &str = "You are a bookkeeping assistant. Summarize the following \
transactions in one short paragraph a small business owner can read at a glance. Mention total \
cash in, total cash out and anything unusual. Reply with plain text only.\n\nTransactions \
(JSON):\n{transactions}";

pub(crate) const EXPAND_DESCRIPTION: &str = "You are a bookkeeping assistant. Rewrite the \
following hint as a clear transaction description of roughly 100 characters. Reply with the \
description only, without quotes.\n\nHint: {hint}";

pub(crate) const PARSE_QUERY: &str = "You are a bookkeeping assistant. Today is {today}. Convert \
the following search request into a JSON filter with the fields text, type, startDate, endDate, \
minAmount and maxAmount. Use ISO dates (YYYY-MM-DD), resolve relative ranges like \"last month\" \
against today, write amounts as plain numbers in the main currency unit and type as income or \
expense. Omit every field the request does not constrain.\n\nRequest: {query}";
