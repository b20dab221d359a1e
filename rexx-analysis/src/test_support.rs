pub(crate) const SAMPLE: &str = "/* REXX */
call main arg(1)
exit

main: procedure
parse arg name
address command 'PIPE literal' name '| console'
do i = 1 to 3
  say right(i, 4)
end
return

/* helpers
   below */
shout:
return translate(arg(1))
";
