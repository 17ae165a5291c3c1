mod polarity;
mod reset;
